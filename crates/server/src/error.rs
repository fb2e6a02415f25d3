use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::{error, warn};
use models::records::ErrorBody;
use sea_orm::DbErr;
use thiserror::Error;

/// Every failure a handler can answer with. The message is sent to the
/// client as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Maps a service error. Only rejections and lookups reach the client
    /// verbatim, anything else is logged and answered with `fallback`.
    pub fn service(err: ServiceError, fallback: &str) -> Self {
        match err {
            ServiceError::NotFound => Self::NotFound(err.to_string()),
            err if err.is_rejection() => {
                warn!("Rejected write: {err}");
                Self::BadRequest(err.to_string())
            }
            err => {
                error!("{fallback}: {err}");
                Self::Internal(fallback.to_string())
            }
        }
    }

    pub fn database(err: DbErr, fallback: &str) -> Self {
        error!("{fallback}: {err}");
        Self::Internal(fallback.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Malformed request body: {}", rejection.body_text());
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
