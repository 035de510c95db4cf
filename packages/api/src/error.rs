//! Error types for form validation and remote calls.

use thiserror::Error;

/// Shown when neither the server nor the transport gave a usable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// A registration form that failed client-side checks. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Phone number must be 10 digits.")]
    BadPhone,
    #[error("Password must be at least 6 characters.")]
    WeakPassword,
    #[error("Please select a valid role.")]
    UnknownRole,
}

/// Failure talking to the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// `message` field of the error body, when there was one.
        message: Option<String>,
    },
    /// A 2xx response whose body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a user-facing notification.
    ///
    /// Prefers the server's own `message`, then the error's description, then
    /// [`FALLBACK_MESSAGE`].
    pub fn notification_text(&self) -> String {
        if let ApiError::Status {
            message: Some(message),
            ..
        } = self
        {
            if !message.trim().is_empty() {
                return message.clone();
            }
        }
        let description = self.to_string();
        if description.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            description
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
