//! Business logic layer.
//!
//! Services sit between the controllers and the repositories. They enforce the rack and cabling
//! rules (unit ranges, non-overlap, one connection per port), hash and check passwords, and run
//! multi-row writes inside a transaction.

pub mod auth;
pub mod connection;
pub mod equipment;
pub mod port;
pub mod rack;
pub mod user;
