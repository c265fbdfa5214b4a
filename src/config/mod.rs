// Configuration module for filewright
// Provider settings, credential resolution and config file persistence

#[allow(clippy::module_inception)]
pub mod config;

// Re-export main types for easier access
pub use config::{ApiKey, EditorConfig, GeminiConfig, OpenAIConfig, ProviderKind};
