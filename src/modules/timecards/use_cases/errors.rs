use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use thiserror::Error;
use uuid::Uuid;

use crate::modules::timecards::core::errors::{DomainError, ErrorBody};
use crate::modules::timecards::core::ports::RepositoryError;

/// Failures surfaced by the use case handlers. An unknown aggregate id is a
/// distinct condition from every validation failure and never carries an
/// error body.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("timecard {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApplicationError::Domain(error) => {
                (StatusCode::CONFLICT, Json(ErrorBody::from(&error))).into_response()
            }
            ApplicationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
