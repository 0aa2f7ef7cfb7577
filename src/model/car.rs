//! Canonical extraction result models
//!
//! These are the normalized shapes produced after parsing and validating the
//! vision model's free-text output. All fields default to empty values so a
//! partially-filled upstream payload still decodes cleanly.

use serde::{Deserialize, Serialize};

/// Performance figures as reported by the model.
///
/// All values are free text; the model may answer qualitatively
/// ("brisk for its class") or numerically ("4.2 seconds").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSpecs {
    pub horsepower: String,
    pub torque: String,
    #[serde(rename = "0_60_mph")]
    pub zero_to_sixty_mph: String,
    pub top_speed: String,
}

/// Descriptive car attributes extracted from the photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarDetails {
    pub brand: String,
    pub model: String,
    pub approximate_year: String,
    pub body_style: String,
    pub exterior_design: String,
    pub interior_design: String,
    pub color: String,
    pub lights: String,
    pub wheels: String,
    pub technology: String,
    pub price_range: String,
    pub where_to_buy: String,
    pub car_features: Vec<String>,
    pub engine_type: String,
    pub performance_specifications: PerformanceSpecs,
    pub safety_features: Vec<String>,
    pub image_url_info: String,
    pub special_features_modifications: String,
}

/// Canonical result of analyzing one uploaded photo.
///
/// Exactly one variant is ever populated. The `NotCar` variant deliberately
/// carries only the description: whatever else the model returned for a
/// non-car image is discarded during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionResult {
    Car { details: CarDetails },
    NotCar { image_description: String },
}

impl ExtractionResult {
    /// Whether the subject was classified as a car.
    ///
    /// Always a true boolean, even when the upstream payload encoded the
    /// flag as a string.
    pub fn is_car(&self) -> bool {
        matches!(self, ExtractionResult::Car { .. })
    }

    /// Serialize to a compact JSON document for session-scoped storage.
    ///
    /// The host web layer stores opaque strings per user session; a result
    /// written with this method reads back verbatim via
    /// [`ExtractionResult::from_session_json`].
    pub fn to_session_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a result previously stored with
    /// [`ExtractionResult::to_session_json`].
    pub fn from_session_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_details() -> CarDetails {
        CarDetails {
            brand: "Mazda".to_string(),
            model: "MX-5".to_string(),
            approximate_year: "2019".to_string(),
            color: "red".to_string(),
            car_features: vec!["convertible top".to_string()],
            performance_specifications: PerformanceSpecs {
                horsepower: "181 hp".to_string(),
                zero_to_sixty_mph: "5.7 seconds".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn session_round_trip_car() {
        let result = ExtractionResult::Car {
            details: sample_details(),
        };

        let stored = result.to_session_json().unwrap();
        let restored = ExtractionResult::from_session_json(&stored).unwrap();

        assert_eq!(restored, result);
        assert!(restored.is_car());
    }

    #[test]
    fn session_round_trip_not_car() {
        let result = ExtractionResult::NotCar {
            image_description: "A bowl of fruit on a table".to_string(),
        };

        let stored = result.to_session_json().unwrap();
        let restored = ExtractionResult::from_session_json(&stored).unwrap();

        assert_eq!(restored, result);
        assert!(!restored.is_car());
    }

    #[test]
    fn performance_specs_use_wire_key_for_acceleration() {
        let specs = PerformanceSpecs {
            zero_to_sixty_mph: "4.2 seconds".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&specs).unwrap();
        assert_eq!(value["0_60_mph"], "4.2 seconds");
    }

    #[test]
    fn details_default_missing_fields() {
        let details: CarDetails =
            serde_json::from_str(r#"{"brand": "Toyota"}"#).unwrap();

        assert_eq!(details.brand, "Toyota");
        assert_eq!(details.model, "");
        assert!(details.safety_features.is_empty());
        assert_eq!(details.performance_specifications, PerformanceSpecs::default());
    }
}
