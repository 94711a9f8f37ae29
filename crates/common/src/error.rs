//! Common error types and handling for AcademiX

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the AcademiX client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl Error {
    /// Map a non-success HTTP status and its message onto the error taxonomy
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Error::Validation(message),
            401 => Error::Authentication(message),
            403 => Error::Authorization(message),
            404 => Error::NotFound(message),
            409 => Error::Conflict(message),
            _ => Error::Api { status, message },
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Configuration(_) => "CONFIGURATION_ERROR",
            Error::Authentication(_) => "AUTHENTICATION_ERROR",
            Error::Authorization(_) => "AUTHORIZATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Conflict(_) => "CONFLICT",
            Error::Request(_) => "REQUEST_ERROR",
            Error::Api { .. } => "API_ERROR",
        }
    }

    /// The message without the variant prefix, suitable for showing to the viewer
    pub fn user_message(&self) -> String {
        match self {
            Error::Configuration(msg)
            | Error::Authentication(msg)
            | Error::Authorization(msg)
            | Error::Validation(msg)
            | Error::NotFound(msg)
            | Error::Conflict(msg)
            | Error::Request(msg) => msg.clone(),
            Error::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
