use axum::http::StatusCode;
use thiserror::Error;

/// Any failure to obtain one of the input documents. Fatal to the render.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("request to {source_ref} failed: {error}")]
    Request {
        source_ref: String,
        #[source]
        error: reqwest::Error,
    },

    #[error("{source_ref} answered with status {status}")]
    Status { source_ref: String, status: u16 },

    #[error("failed to read {source_ref}: {error}")]
    Read {
        source_ref: String,
        #[source]
        error: std::io::Error,
    },

    #[error("malformed document {source_ref}: {error}")]
    Malformed {
        source_ref: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("document {source_ref} has no `{field}` array")]
    MissingField {
        source_ref: String,
        field: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { name: &'static str, value: String },

    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} ({value}) exceeds TRACKER_MAX_DAYS ({max_days})")]
    ExceedsWindow {
        name: &'static str,
        value: u32,
        max_days: u32,
    },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unavailable(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: err.to_string(),
        }
    }
}

impl From<DataUnavailable> for AppError {
    fn from(err: DataUnavailable) -> Self {
        Self::unavailable(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
