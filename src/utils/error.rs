use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("XML decode error: {0}")]
    Decode(#[from] quick_xml::Error),

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Configuration error for {field} ({value}): {reason}")]
    Config {
        field: String,
        value: String,
        reason: String,
    },
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
