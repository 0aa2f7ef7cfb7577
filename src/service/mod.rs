pub mod extraction;
pub mod presentation;

pub use extraction::{ExtractionError, ExtractionService};
pub use presentation::{to_view_model, NOT_A_CAR_MESSAGE};
