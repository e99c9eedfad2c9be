use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl DetectError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DetectError::HttpError(_) => "Could not set up the HTTP client".to_string(),
            DetectError::IoError(e) => format!("Could not read a file: {}", e),
            DetectError::SerializationError(_) => "Could not decode a JSON document".to_string(),
            DetectError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            DetectError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {} ({})", value, field, reason),
            DetectError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DetectError::HttpError(_) => "Check the TLS/proxy environment of this machine",
            DetectError::IoError(_) => "Make sure the config file exists and is readable",
            DetectError::SerializationError(_) => "Check that the service returns valid JSON",
            DetectError::ConfigValidationError { .. } => {
                "Fix the TOML syntax of the config file"
            }
            DetectError::InvalidConfigValueError { .. } | DetectError::MissingConfigError { .. } => {
                "Run with --help to see accepted values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DetectError>;
