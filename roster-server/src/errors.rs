use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::RegistryError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid ID format")]
    InvalidIdFormat,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid input")]
    InvalidInput,
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { .. } => ApiError::UserNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let status = match self {
            ApiError::InvalidIdFormat | ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_maps_to_not_found() {
        let err: ApiError = RegistryError::NotFound { id: 7 }.into();
        assert_eq!(err, ApiError::UserNotFound);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidIdFormat.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidInput.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UserNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
