use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Image decoding failed: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Download from {url} returned status {status}")]
    UpstreamStatusError { url: String, status: u16 },

    #[error("Download exceeds the {limit} byte limit")]
    PayloadTooLargeError { limit: usize },

    #[error("{message}")]
    MissingFieldError { field: String, message: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("{message}")]
    FeatureDisabledError { message: String },

    #[error("{message}")]
    ProcessingError { message: String },
}

impl AnalyzerError {
    /// 請求端的輸入問題 (HTTP 400)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalyzerError::MissingFieldError { .. } | AnalyzerError::InvalidConfigValueError { .. }
        )
    }

    pub fn missing_field(field: &str, message: &str) -> Self {
        AnalyzerError::MissingFieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
