use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::view::pages::error::render_error_page;

/// A record referenced by ID does not exist.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Rack ID {0} not found")]
    RackNotFound(i32),
    #[error("Equipment ID {0} not found")]
    EquipmentNotFound(i32),
    #[error("Port ID {0} not found")]
    PortNotFound(i32),
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        render_error_page(StatusCode::NOT_FOUND, &self.to_string())
    }
}
