//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per table. Each is
//! generic over [`sea_orm::ConnectionTrait`] so the same repository works on a plain connection
//! or inside a transaction.

pub mod connection;
pub mod equipment;
pub mod port;
pub mod rack;
pub mod user;
