//! Structured extraction from an uploaded photo
//!
//! Submits the image with a fixed schema-describing instruction, then
//! defensively parses the model's free-text reply into the canonical
//! [`ExtractionResult`].

use std::path::Path;

use crate::model::ExtractionResult;
use crate::provider::{ImagePayload, VisionModelClient};

pub mod error;
mod parse;
pub mod prompts;

pub use error::ExtractionError;

/// Service implementing the extraction contract against a vision model.
///
/// Generic over the client so tests can substitute a stub; production hosts
/// construct it with [`crate::provider::GeminiClient`].
pub struct ExtractionService<C: VisionModelClient> {
    client: C,
}

impl<C: VisionModelClient> ExtractionService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Analyze the image at `image_path` and return the canonical result.
    ///
    /// One outbound model call per invocation, no retries: a transient
    /// provider failure propagates to the caller.
    pub async fn extract(&self, image_path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let start_time = std::time::Instant::now();

        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(|source| ExtractionError::ImageRead {
                path: image_path.to_path_buf(),
                source,
            })?;
        let image = ImagePayload::from_file_bytes(image_path, bytes);

        tracing::debug!(
            path = %image_path.display(),
            mime_type = %image.mime_type,
            image_bytes = image.bytes.len(),
            "Submitting image for structured extraction"
        );

        let raw = match self.client.generate(prompts::EXTRACTION_PROMPT, &image).await {
            Ok(text) => {
                tracing::info!(
                    elapsed_ms = start_time.elapsed().as_millis(),
                    response_chars = text.len(),
                    "Vision model call completed"
                );
                text
            }
            Err(e) => {
                tracing::error!(
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Vision model call failed"
                );
                return Err(e.into());
            }
        };

        match parse::parse_response(&raw) {
            Ok(result) => {
                tracing::debug!(is_car = result.is_car(), "Model response normalized");
                Ok(result)
            }
            Err(ExtractionError::NoJsonFound) => {
                // Operator-visible: the raw text belongs in the log, not in
                // anything shown to the end user.
                tracing::error!(raw_response = %raw, "No JSON object found in model response");
                Err(ExtractionError::NoJsonFound)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse model response");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use async_trait::async_trait;

    /// Stub client returning a canned response without any network call.
    struct StubClient {
        response: Result<String, ProviderError>,
    }

    impl StubClient {
        fn replying(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(ProviderError::EmptyResponse),
            }
        }
    }

    #[async_trait]
    impl VisionModelClient for StubClient {
        async fn generate(
            &self,
            _prompt: &str,
            _image: &ImagePayload,
        ) -> Result<String, ProviderError> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(ProviderError::EmptyResponse),
            }
        }
    }

    fn temp_image(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("carlens-{}-{}", std::process::id(), name));
        std::fs::write(&path, [0xFFu8, 0xD8, 0xFF, 0xE0]).unwrap();
        path
    }

    #[tokio::test]
    async fn extract_returns_car_variant_from_fenced_response() {
        let service = ExtractionService::new(StubClient::replying(
            "Here you go:\n```json\n{\"is_car\": \"True\", \"car_details\": {\"brand\": \"Audi\"}}\n```",
        ));
        let path = temp_image("car.jpg");

        let result = service.extract(&path).await.unwrap();
        std::fs::remove_file(&path).ok();

        match result {
            ExtractionResult::Car { details } => assert_eq!(details.brand, "Audi"),
            other => panic!("expected car variant, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn extract_surfaces_no_json_found() {
        let service = ExtractionService::new(StubClient::replying("Sorry, I cannot process this."));
        let path = temp_image("nojson.jpg");

        let err = service.extract(&path).await.unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ExtractionError::NoJsonFound));
    }

    #[tokio::test]
    async fn extract_propagates_provider_failure() {
        let service = ExtractionService::new(StubClient::failing());
        let path = temp_image("provider.jpg");

        let err = service.extract(&path).await.unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ExtractionError::Provider(_)));
    }

    #[tokio::test]
    async fn extract_fails_on_unreadable_image() {
        let service = ExtractionService::new(StubClient::replying("{}"));
        let path = std::env::temp_dir().join("carlens-does-not-exist.jpg");

        let err = service.extract(&path).await.unwrap_err();
        assert!(matches!(err, ExtractionError::ImageRead { .. }));
    }
}
