//! Error types for the extraction contract handler

use std::path::PathBuf;

use crate::provider::ProviderError;

/// Error type for structured extraction from an uploaded image.
///
/// Every failure surfaces to the immediate caller; nothing is retried and
/// no partially populated result is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The local image file could not be read.
    #[error("failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The outbound model call failed.
    #[error("vision model call failed: {0}")]
    Provider(#[from] ProviderError),

    /// The response text contained no brace-delimited span. The raw text is
    /// logged for the operator, never surfaced to the end user.
    #[error("no JSON object found in model response")]
    NoJsonFound,

    /// A brace span was located but did not parse as the expected payload.
    #[error("model response contained malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}
