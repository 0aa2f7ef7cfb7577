//! Defensive parsing of the model's free-text response
//!
//! The contract asks for bare JSON but the response is treated as untrusted
//! text: the payload is located by brace span, the `is_car` flag is
//! normalized from its string encoding, and the not-car shape is reduced to
//! the minimal variant before anything leaves this module.

use serde_json::Value;

use super::error::ExtractionError;
use crate::model::{CarDetails, ExtractionResult};

/// Locate a JSON object embedded in surrounding non-JSON text.
///
/// Takes the maximal span from the first `{` to the last `}`, which
/// tolerates prose and code-fence markers around the payload. Returns
/// `None` when no such span exists.
pub(crate) fn locate_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Normalize the `is_car` flag to a true boolean.
///
/// The model sometimes encodes the flag as a string; a trimmed,
/// case-insensitive `"true"` counts. Any other value, type, or absence is
/// treated as not-a-car.
fn normalize_is_car(payload: &Value) -> bool {
    match payload.get("is_car") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Parse the raw model response into the canonical result.
pub(crate) fn parse_response(raw: &str) -> Result<ExtractionResult, ExtractionError> {
    let span = locate_json_span(raw.trim()).ok_or(ExtractionError::NoJsonFound)?;

    let payload: Value = serde_json::from_str(span)?;

    if !normalize_is_car(&payload) {
        // Information minimization: for non-car images only the description
        // survives, whatever else the model volunteered.
        let image_description = payload
            .get("image_url_info")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Ok(ExtractionResult::NotCar { image_description });
    }

    let details = match payload.get("car_details") {
        Some(value) => serde_json::from_value::<CarDetails>(value.clone())?,
        None => CarDetails::default(),
    };

    Ok(ExtractionResult::Car { details })
}
