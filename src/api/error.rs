use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::model::{AnalysisError, StorageError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Movie not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Storage(e) => {
                error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage unavailable".to_string(),
                )
            }
            ApiError::Analysis(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
