use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{EditError, EditResult};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

const GEMINI_KEY_URL: &str = "https://makersuite.google.com/app/apikey";
const OPENAI_KEY_URL: &str = "https://platform.openai.com/api-keys";

/// Secret used to authenticate against a generation service
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Which hosted model family performs the edit
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
    OpenAI,
}

impl FromStr for ProviderKind {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "openai" => Ok(ProviderKind::OpenAI),
            other => Err(EditError::configuration(format!(
                "Unknown provider '{}' (expected 'gemini' or 'openai')",
                other
            ))),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Gemini => f.write_str("gemini"),
            ProviderKind::OpenAI => f.write_str("openai"),
        }
    }
}

/// Google Generative Language API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API Key (if not provided, read from `api_key_env`)
    pub api_key: Option<String>,
    /// Environment variable holding the key
    pub api_key_env: String,
    pub model: String,
    pub base_url: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl GeminiConfig {
    /// Resolve the credential, failing with setup instructions when absent
    pub fn credential(&self) -> EditResult<ApiKey> {
        resolve_credential(self.api_key.as_deref(), &self.api_key_env, GEMINI_KEY_URL)
    }
}

/// OpenAI chat completion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAIConfig {
    /// API Key (if not provided, read from `api_key_env`)
    pub api_key: Option<String>,
    pub api_key_env: String,
    /// Organization ID
    pub org_id: Option<String>,
    pub model: String,
    /// Override for the API base, e.g. a proxy or compatible server
    pub base_url: Option<String>,
    /// Max tokens to generate
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            org_id: None,
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: None,
            max_tokens: Some(2048),
            temperature: Some(0.7),
        }
    }
}

impl OpenAIConfig {
    pub fn credential(&self) -> EditResult<ApiKey> {
        resolve_credential(self.api_key.as_deref(), &self.api_key_env, OPENAI_KEY_URL)
    }
}

fn resolve_credential(explicit: Option<&str>, env_var: &str, key_url: &str) -> EditResult<ApiKey> {
    if let Some(key) = explicit.filter(|k| !k.trim().is_empty()) {
        return Ok(ApiKey::new(key));
    }

    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => {
            debug!("Using credential from {}", env_var);
            Ok(ApiKey::new(key))
        }
        _ => Err(EditError::configuration_with_help(
            format!(
                "Please set {} environment variable.\nGet your key at: {}",
                env_var, key_url
            ),
            format!(
                "1. Get API key: {}\n2. Set it: export {}='your-key'\n3. Run the command again",
                key_url, env_var
            ),
        )),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    pub provider: ProviderKind,
    pub gemini: GeminiConfig,
    pub openai: OpenAIConfig,
}

impl EditorConfig {
    pub fn load(path: &Path) -> EditResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let content = std::fs::read_to_string(path).map_err(|e| {
            EditError::configuration(format!(
                "Cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let parsed = match ext {
            "json" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            "toml" => toml::from_str(&content).map_err(|e| e.to_string()),
            _ => {
                return Err(EditError::configuration(format!(
                    "Unsupported config format: {}",
                    ext
                )))
            }
        };

        parsed.map_err(|e| {
            EditError::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    pub fn save(&self, path: &Path) -> EditResult<()> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let content = match ext {
            "json" => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            "yaml" | "yml" => serde_yaml::to_string(self).map_err(|e| e.to_string()),
            "toml" => toml::to_string(self).map_err(|e| e.to_string()),
            _ => {
                return Err(EditError::configuration(format!(
                    "Unsupported config format: {}",
                    ext
                )))
            }
        }
        .map_err(EditError::configuration)?;

        std::fs::write(path, content).map_err(|e| {
            EditError::configuration(format!(
                "Cannot write config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("filewright")
            .join("config.toml")
    }

    /// Load an explicit config file, or the default one when it exists
    pub fn load_or_default(path: Option<&Path>) -> EditResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = Self::default_config_path();
        if default_path.is_file() {
            debug!("Loading config from {}", default_path.display());
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}
