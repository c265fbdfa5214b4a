//! Hosted text-generation services.
//!
//! Everything the editor needs from a model is the [`TextGenerator`] trait:
//! one prompt in, one block of text out.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::config::{EditorConfig, ProviderKind};
use crate::error::EditResult;

pub mod gemini;
pub mod openai;

pub use gemini::GeminiClient;
pub use openai::OpenAIClient;

/// A request/response text-generation capability
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the model's raw text
    async fn generate(&self, prompt: &str) -> EditResult<String>;
}

/// Build the provider selected in `config`.
///
/// The credential is resolved here, so a missing key is reported before the
/// caller touches any file.
pub fn build_generator(config: &EditorConfig) -> EditResult<Arc<dyn TextGenerator>> {
    info!("Using {} provider", config.provider);

    match config.provider {
        ProviderKind::Gemini => {
            let key = config.gemini.credential()?;
            Ok(Arc::new(GeminiClient::new(key, config.gemini.clone())))
        }
        ProviderKind::OpenAI => {
            let key = config.openai.credential()?;
            Ok(Arc::new(OpenAIClient::new(key, config.openai.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_build_generator_without_key_fails() {
        let mut config = EditorConfig::default();
        config.gemini.api_key_env = "FILEWRIGHT_TEST_UNSET_VAR_3".to_string();

        let err = build_generator(&config).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_build_generator_openai() {
        let mut config = EditorConfig {
            provider: ProviderKind::OpenAI,
            ..Default::default()
        };
        config.openai.api_key = Some("sk-test".to_string());

        assert!(build_generator(&config).is_ok());
    }
}
