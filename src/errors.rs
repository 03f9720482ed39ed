use axum::http::StatusCode;
use std::fmt;

/// Rejection of a malformed request to the host itself.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failure of a user action. Every variant ends the action; nothing retries.
#[derive(Debug)]
pub enum ClientError {
    /// A required field was empty or malformed; no request was sent.
    Validation(String),
    /// The request never produced a response.
    Transport(String),
    /// The API answered with a non-2xx status. `body` is the raw response text.
    Status { status: StatusCode, body: String },
    /// A 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport(err: impl std::error::Error) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Text shown to the user after a context prefix such as "Could not add habit".
    /// Non-2xx bodies are passed through untouched; an empty body falls back to the status.
    pub fn detail(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Transport(_) => "the server is unreachable".to_string(),
            Self::Status { status, body } => {
                let body = body.trim();
                if body.is_empty() {
                    format!("HTTP error, status {}", status.as_u16())
                } else {
                    body.to_string()
                }
            }
            Self::Decode(_) => "unexpected response from the server".to_string(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "validation failed: {message}"),
            Self::Transport(message) => write!(f, "transport error: {message}"),
            Self::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            Self::Decode(message) => write!(f, "invalid response body: {message}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::transport(err)
        }
    }
}
