/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, ZarinpalError>;

/// Main error type returned by every client operation
#[derive(thiserror::Error, Debug)]
pub enum ZarinpalError {
    /// Bad merchant id, disabled sandbox mode, unusable base URL or env var
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A request field failed local validation; no network call was made
    #[error("Validation error on `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The gateway could not be reached or answered with something other than JSON
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failures of the single outbound POST an operation performs
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("Zarinpal request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Zarinpal response from {endpoint} is not valid JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    /// Endpoint URL the failed call was sent to
    pub fn endpoint(&self) -> &str {
        match self {
            TransportError::Http { endpoint, .. } | TransportError::Decode { endpoint, .. } => {
                endpoint
            }
        }
    }
}

// Helper functions for common error scenarios
impl ZarinpalError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ZarinpalError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        ZarinpalError::Configuration(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ZarinpalError::Validation { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ZarinpalError::Configuration(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ZarinpalError::Transport(_))
    }
}
