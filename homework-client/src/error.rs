//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or the chat API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Review API request could not be completed
    #[error("Ошибка при попытке подключения к эндпоинту: {0}")]
    Transport(#[from] reqwest::Error),

    /// Review API answered with something other than 200 OK
    #[error("Ошибка при попытке подключения к эндпоинту: Ответ не получен, код ошибки: {0}")]
    UnexpectedStatus(u16),

    /// Response body is not JSON
    #[error(
        "Ошибка при попытке подключения к эндпоинту: Формат полученного ответа - не JSON: {0}"
    )]
    Parse(String),

    /// Chat API request could not be completed; carries no URL
    #[error("Ошибка при отправке сообщения: {0}")]
    Delivery(reqwest::Error),

    /// Chat API refused the request
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus(status) | Self::ApiError { status, .. } => Some(*status),
            Self::Transport(e) | Self::Delivery(e) => e.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }
}
