//! Vision model provider clients

mod gemini;

use std::path::Path;

use async_trait::async_trait;

pub use gemini::GeminiClient;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("provider response contained no text content")]
    EmptyResponse,
}

/// An image submitted alongside the instruction text.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Build a payload from raw bytes, deriving the MIME type from the
    /// file extension of `path`.
    pub fn from_file_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type_for(path).to_string(),
            bytes,
        }
    }
}

/// Trait for multimodal model clients that answer a text prompt about an image.
#[async_trait]
pub trait VisionModelClient: Send + Sync {
    /// Submit the prompt and image, returning the model's raw text response.
    ///
    /// The response is untrusted free text; callers must not assume it is
    /// valid JSON even when the prompt asked for it.
    async fn generate(&self, prompt: &str, image: &ImagePayload) -> Result<String, ProviderError>;
}

/// Map a file extension to an image MIME type.
///
/// Unknown or missing extensions fall back to JPEG, the most common upload.
fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}
