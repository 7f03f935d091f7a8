//! HTTP controller endpoints.
//!
//! Axum handlers for the HTML pages, the form posts behind them and the read-only JSON API.
//! Page handlers render views; form handlers check the session user and CSRF token, call a
//! service and redirect back to a page (Post/Redirect/Get) with the outcome stored as a flash
//! message. API handlers are annotated for utoipa.

pub mod api;
pub mod asset;
pub mod auth;
pub mod connection;
pub mod equipment;
pub mod port;
pub mod profile;
pub mod rack;
pub mod util;
