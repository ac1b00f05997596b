use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the body text, or the status reason when the body is empty.
    #[error("{status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Invalid JSON from backend: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upload succeeded but no photo record was returned")]
    EmptyUpload,

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub(crate) fn status(status: reqwest::StatusCode, body: String) -> Self {
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("Request failed").to_string()
        } else {
            body
        };
        ApiError::Status { status, message }
    }

    /// True for a 401 from the backend (wrong admin password).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if status.as_u16() == 401)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
