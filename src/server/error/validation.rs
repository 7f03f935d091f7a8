use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::view::pages::error::render_error_page;

/// Input rejected by a business rule. The message is shown to the user as-is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("Rack height must be between 1 and {max} U, got {height}")]
    RackHeightOutOfRange { height: i32, max: i32 },
    #[error("Rack height {height} U is too low for {name}, which reaches U{top_u}")]
    RackTooLow {
        height: i32,
        name: String,
        top_u: i32,
    },
    #[error("Equipment position must be U1 or higher, got U{0}")]
    InvalidUnitPosition(i32),
    #[error("Equipment height must be at least 1 U, got {0}")]
    InvalidUnitHeight(i32),
    #[error("{name} would reach U{top_u} but the rack is only {height} U high")]
    ExceedsRack {
        name: String,
        top_u: i32,
        height: i32,
    },
    #[error("U{bottom_u}-U{top_u} is already occupied by {other}")]
    Overlap {
        bottom_u: i32,
        top_u: i32,
        other: String,
    },
    #[error("Enter at least one port name")]
    NoPortNames,
    #[error("Port {0} already exists on this equipment")]
    DuplicatePort(String),
    #[error("A port cannot be connected to itself")]
    SelfConnection,
    #[error("Port {0} is already connected")]
    PortAlreadyConnected(String),
    #[error("Port {0} is not connected")]
    PortNotConnected(String),
    #[error("Unknown theme {0:?}")]
    UnknownTheme(String),
    #[error("Current password is incorrect")]
    IncorrectPassword,
    #[error("The new password and its confirmation do not match")]
    PasswordMismatch,
    #[error("The new password must be at least {0} characters long")]
    PasswordTooShort(usize),
    #[error("The new password must be at most {0} bytes long")]
    PasswordTooLong(usize),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        render_error_page(StatusCode::UNPROCESSABLE_ENTITY, &self.to_string())
    }
}
