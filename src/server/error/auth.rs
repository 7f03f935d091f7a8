use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::view::pages::error::render_error_page;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Form submitted with a CSRF token that does not match the session")]
    CsrfValidationFailed,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Redirect::to("/login").into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Redirect::to("/login").into_response()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                render_error_page(
                    StatusCode::BAD_REQUEST,
                    "Your form has expired, please go back, reload the page and try again.",
                )
            }
        }
    }
}
