use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IrisboardError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] csv::Error),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Requested {requested} clusters but the dataset only has {available} samples")]
    TooManyClusters { requested: usize, available: usize },

    #[error("Clustering error: {0}")]
    Clustering(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IrisboardError>;

/// Error returned by HTTP handlers. Renders as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<IrisboardError> for ApiError {
    fn from(err: IrisboardError) -> Self {
        match err {
            IrisboardError::UnknownAttribute(_) => ApiError::BadRequest(err.to_string()),
            IrisboardError::TooManyClusters { .. } => ApiError::Unprocessable(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, "Request failed: {}", self);
        } else {
            tracing::warn!(%status, "Request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
