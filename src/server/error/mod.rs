//! Error types for the DocRack server application.
//!
//! This module provides the error handling system with specialized error types for the
//! different domains (authentication, configuration, inventory lookups, validation). All errors
//! implement `IntoResponse` so handlers can return them directly, and use `thiserror` for
//! `Display` and `Error` implementations.

pub mod api;
pub mod auth;
pub mod config;
pub mod inventory;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    server::error::{
        auth::AuthError, config::ConfigError, inventory::InventoryError,
        validation::ValidationError,
    },
    view::pages::error::render_error_page,
};

/// Main error type for the DocRack server application.
///
/// Aggregates the domain-specific error types and external library errors into a single type.
/// `#[from]` conversions let handlers and services use `?` on any of them.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Authentication errors (session, CSRF, user validation)
/// - Inventory errors (unknown rack, equipment, port or connection)
/// - Validation errors (rejected form input)
/// - External library errors (database, sessions, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, user validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A referenced record does not exist.
    #[error(transparent)]
    InventoryError(#[from] InventoryError),
    /// Input rejected by a business rule.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Internal error indicating a bug in DocRack's code.
    #[error("Internal error with DocRack's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing or verification failed.
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// Listener or server I/O error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTML responses.
///
/// # Returns
/// - 303 See Other to `/login` - No user in session
/// - 400 Bad Request - CSRF token mismatch
/// - 404 Not Found - Unknown rack, equipment, port or connection
/// - 422 Unprocessable Entity - Validation error not handled by the form
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::InventoryError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic error page so implementation details or
/// sensitive information never reach the browser.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        render_error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong on our side. Please try again.",
        )
    }
}
