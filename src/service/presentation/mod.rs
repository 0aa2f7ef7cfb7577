//! Presentation adapter
//!
//! Maps the canonical extraction result into the flat view-model consumed
//! identically by the web page, the PDF report, and the emailed report.

pub mod links;

use crate::model::{CarViewModel, ExtractionResult, NotCarViewModel, ViewModel};

/// Fixed message shown when the uploaded image was not a car.
pub const NOT_A_CAR_MESSAGE: &str = "The uploaded image does not appear to be a car.";

/// Build a render-ready view-model from a stored extraction result.
///
/// Pure and infallible: every field has a default, so two calls with the
/// same inputs yield identical view-models. `uploaded_image_url` is the
/// remote storage location of the original upload, supplied by the host.
pub fn to_view_model(result: &ExtractionResult, uploaded_image_url: &str) -> ViewModel {
    match result {
        ExtractionResult::Car { details } => ViewModel::Car(CarViewModel {
            car_name: details.brand.clone(),
            car_model: details.model.clone(),
            car_year: details.approximate_year.clone(),
            body_style: details.body_style.clone(),
            exterior_design: details.exterior_design.clone(),
            interior_design: details.interior_design.clone(),
            color: details.color.clone(),
            lights: details.lights.clone(),
            wheels: details.wheels.clone(),
            technology: details.technology.clone(),
            price: details.price_range.clone(),
            where_to_buy: details.where_to_buy.clone(),
            where_to_buy_links: links::scan_links(&details.where_to_buy),
            engine_type: details.engine_type.clone(),
            image_url: details.image_url_info.clone(),
            special_features_modifications: details.special_features_modifications.clone(),
            car_features: details.car_features.clone(),
            safety_features: details.safety_features.clone(),
            performance_specifications: details.performance_specifications.clone(),
            user_uploaded_image_url: uploaded_image_url.to_string(),
        }),
        ExtractionResult::NotCar { image_description } => ViewModel::NotCar(NotCarViewModel {
            image_description: image_description.clone(),
            message: NOT_A_CAR_MESSAGE.to_string(),
            user_uploaded_image_url: uploaded_image_url.to_string(),
        }),
    }
}
