//! Instruction text for the structured-extraction contract

/// Fixed instruction sent with every image.
///
/// Specifies the two mutually exclusive output shapes and asks for bare
/// JSON. The model frequently ignores the "no extra explanation" part and
/// wraps the payload in prose or code fences anyway; the parser in
/// [`super::parse`] never assumes compliance.
pub const EXTRACTION_PROMPT: &str = r#"About this image: First, tell me if it's a car or not.
If it is a car, return a JSON object with this structure:
{
  "is_car": true,
  "car_details": {
    "brand": string,
    "model": string,
    "approximate_year": string,
    "body_style": string,
    "exterior_design": string,
    "interior_design": string,
    "color": string,
    "lights": string,
    "wheels": string,
    "technology": string,
    "price_range": string,
    "where_to_buy": string,
    "car_features": [string, ...],
    "engine_type": string,
    "performance_specifications": {
      "horsepower": string,
      "torque": string,
      "0_60_mph": string,
      "top_speed": string
    },
    "safety_features": [string, ...],
    "image_url_info": string,
    "special_features_modifications": string
  }
}.
If it's NOT a car, return:
{
  "is_car": false,
  "image_url_info": string
}.
Only return valid JSON. No extra explanation."#;
