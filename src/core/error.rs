use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::countries::clients::UpstreamError;
use crate::shared::constants::COUNTRIES_UNAVAILABLE_MESSAGE;
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Callers only ever see one message; the cause stays in the logs
        match self {
            AppError::Upstream(ref e) => {
                tracing::error!("Upstream error: {}", e);
            }
        }

        let body = Json(ErrorResponse::new(COUNTRIES_UNAVAILABLE_MESSAGE));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
