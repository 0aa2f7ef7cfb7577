//! Car photo intelligence core
//!
//! Takes a user-uploaded photo, asks a vision-language model whether it shows
//! a car, defensively parses the model's free-text reply into a canonical
//! [`ExtractionResult`], and maps stored results into flat view-models for
//! rendering. The host web layer owns uploads, sessions, and the rendering
//! surfaces; this crate is the transformation core it calls into.

pub mod model;
pub mod provider;
pub mod service;

pub use model::{
    CarDetails, CarViewModel, Config, ConfigError, ExtractionResult, NotCarViewModel,
    PerformanceSpecs, ViewModel,
};
pub use provider::{GeminiClient, ImagePayload, ProviderError, VisionModelClient};
pub use service::{to_view_model, ExtractionError, ExtractionService, NOT_A_CAR_MESSAGE};
