use std::path::PathBuf;
use thiserror::Error;

/// Error kinds a caller can branch on without inspecting messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Read,
    Service,
    Write,
}

/// Main error type for filewright
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        remediation: Option<String>,
    },

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Generation service error: {message}")]
    Service { message: String },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EditError {
    /// Create a new configuration error without remediation steps
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            remediation: None,
        }
    }

    /// Create a new configuration error carrying instructions for the user
    pub fn configuration_with_help(
        message: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            remediation: Some(remediation.into()),
        }
    }

    /// Create a new read error
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new generation service error
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// Create a new write error
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::Configuration { .. } => ErrorKind::Configuration,
            EditError::Read { .. } => ErrorKind::Read,
            EditError::Service { .. } => ErrorKind::Service,
            EditError::Write { .. } => ErrorKind::Write,
        }
    }

    /// Step-by-step instructions for fixing a configuration error
    pub fn remediation(&self) -> Option<&str> {
        match self {
            EditError::Configuration { remediation, .. } => remediation.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for EditError {
    fn from(error: reqwest::Error) -> Self {
        EditError::service(format!("HTTP request failed: {}", error))
    }
}

impl From<async_openai::error::OpenAIError> for EditError {
    fn from(error: async_openai::error::OpenAIError) -> Self {
        EditError::service(format!("OpenAI request failed: {}", error))
    }
}

/// Result type alias using EditError
pub type EditResult<T> = Result<T, EditError>;
