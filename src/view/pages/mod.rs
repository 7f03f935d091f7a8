//! Full pages, one module per screen.
//!
//! Each module exposes a function returning the rendered document so controllers never touch
//! the component tree directly.

pub mod connections;
pub mod dashboard;
pub mod equipment;
pub mod error;
pub mod login;
pub mod profile;
pub mod rack;
