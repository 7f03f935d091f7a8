//! Server-rendered HTML.
//!
//! Pages are dioxus components rendered to strings with `dioxus-ssr`. Nothing here runs in the
//! browser; forms post back to the server and every interaction is a full page load.

pub mod components;
pub mod pages;
pub mod render;
