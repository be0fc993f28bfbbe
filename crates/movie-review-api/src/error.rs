use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with anything other than 200
    #[error("server returned {status}: {}", .detail.as_deref().unwrap_or("None"))]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a response (connection refused, DNS, reset, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Left-hand side of the `❌ {label} {sep} {detail}.` error line
    pub fn label(&self) -> String {
        match self {
            ApiError::Status { status, .. } => status.to_string(),
            ApiError::Transport(_) => "request failed".to_string(),
            ApiError::Decode(_) => "invalid response".to_string(),
        }
    }

    /// Right-hand side of the error line; a missing server detail reads `None`
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status { detail, .. } => detail.clone().unwrap_or_else(|| "None".to_string()),
            ApiError::Transport(e) => e.to_string(),
            ApiError::Decode(e) => e.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
