use crate::dto::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use domain::DomainError;
use tracing::error;

/// A domain failure on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::NotFound { kind, id } => {
                tracing::debug!(kind, id = %id, "record not found");
                (StatusCode::NOT_FOUND, format!("{} not found", kind))
            }
            DomainError::EmailAlreadyExists(_) => (StatusCode::CONFLICT, self.0.to_string()),
            DomainError::IoError(_)
            | DomainError::RepositoryError(_)
            | DomainError::ParsingError(_) => {
                error!("request failed: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
