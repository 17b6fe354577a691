use thiserror::Error;

/// Error types for the commit-graph crate.
///
/// The layout engine itself never fails; these cover the boundary helpers
/// (JSON entry point, log record parsing, config loading, palette setup).
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Color palette must contain at least one color")]
    EmptyPalette,

    #[error("Invalid color value: '{value}'")]
    InvalidColor { value: String },

    #[error("Malformed log record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for commit-graph operations
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    /// Create a new InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new ConfigError
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new MalformedRecord error
    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }
}
