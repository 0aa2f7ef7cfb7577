pub mod car;
pub mod config;
pub mod view;

pub use car::{CarDetails, ExtractionResult, PerformanceSpecs};
pub use config::{Config, ConfigError};
pub use view::{CarViewModel, NotCarViewModel, ViewModel};
