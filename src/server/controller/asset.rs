use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::view::pages::error::render_error_page;

const STYLESHEET: &str = include_str!("../../../assets/style.css");

pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}

/// Fallback for unknown paths
pub async fn not_found() -> Response {
    render_error_page(StatusCode::NOT_FOUND, "This page does not exist.")
}
