use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, Error},
};

/// Wrapper giving [`Error`] a JSON body for the `/api` routes.
///
/// # Returns
/// - 401 Unauthorized - No valid user in session
/// - 400 Bad Request - CSRF or validation failure
/// - 404 Not Found - Unknown ID
/// - 500 Internal Server Error - Anything else (logged)
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn json(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::AuthError(AuthError::CsrfValidationFailed) => {
                Self::json(StatusCode::BAD_REQUEST, "Invalid CSRF token")
            }
            Error::AuthError(err) => {
                tracing::debug!("{}", err);

                Self::json(StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Error::InventoryError(err) => Self::json(StatusCode::NOT_FOUND, err.to_string()),
            Error::ValidationError(err) => Self::json(StatusCode::BAD_REQUEST, err.to_string()),
            err => {
                tracing::error!("{}", err);

                Self::json(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
