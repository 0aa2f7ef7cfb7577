//! Presentation view-models
//!
//! Flat, render-ready mappings derived from the canonical extraction result.
//! The same view-model feeds the HTML page, the PDF report, and the emailed
//! report, so everything here is `Serialize` and carries no behavior.

use serde::Serialize;

use super::car::PerformanceSpecs;

/// View-model handed to a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewModel {
    Car(CarViewModel),
    NotCar(NotCarViewModel),
}

/// Flattened car attributes with presentation field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CarViewModel {
    pub car_name: String,
    pub car_model: String,
    pub car_year: String,
    pub body_style: String,
    pub exterior_design: String,
    pub interior_design: String,
    pub color: String,
    pub lights: String,
    pub wheels: String,
    pub technology: String,
    pub price: String,
    pub where_to_buy: String,
    /// Links scraped out of the free-text `where_to_buy` field, in order of
    /// appearance. Best effort: duplicates and unreachable URLs pass through.
    pub where_to_buy_links: Vec<String>,
    pub engine_type: String,
    pub image_url: String,
    pub special_features_modifications: String,
    pub car_features: Vec<String>,
    pub safety_features: Vec<String>,
    pub performance_specifications: PerformanceSpecs,
    /// Remote storage location of the user's original upload, supplied by
    /// the host web layer. Unrelated to any extracted field.
    pub user_uploaded_image_url: String,
}

/// Minimal view-model for images that were not classified as a car.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotCarViewModel {
    pub image_description: String,
    pub message: String,
    pub user_uploaded_image_url: String,
}
