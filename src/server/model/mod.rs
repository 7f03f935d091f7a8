//! Server application models and type definitions.
//!
//! This module contains the application state, database model type aliases and the typed
//! session data structures used by the HTTP handlers.

pub mod app;
pub mod db;
pub mod session;
