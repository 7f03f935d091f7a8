//! Test fixture modules for database record creation.
//!
//! - `user` - DocRack user accounts with hashed passwords
//! - `rack` - Racks, equipment, ports and connections
//! - `factory` - In-memory models that never touch the database

pub mod factory;
pub mod rack;
pub mod user;
