//! `SeaORM` Entity definitions for DocRack

pub mod prelude;

pub mod docrack_connection;
pub mod docrack_equipment;
pub mod docrack_port;
pub mod docrack_rack;
pub mod docrack_user;
