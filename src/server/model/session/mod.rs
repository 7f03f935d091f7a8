//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using tower-sessions. Each
//! submodule defines one piece of session state (user ID, CSRF token, flash message) with
//! methods for inserting, retrieving and removing it.

pub mod csrf;
pub mod flash;
pub mod user;
