//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main docrack crate to keep fixture signatures readable.

/// Type alias for DocRack user database model.
pub type UserModel = entity::docrack_user::Model;

/// Type alias for rack database model.
pub type RackModel = entity::docrack_rack::Model;

/// Type alias for equipment database model.
pub type EquipmentModel = entity::docrack_equipment::Model;

/// Type alias for port database model.
pub type PortModel = entity::docrack_port::Model;

/// Type alias for connection database model.
pub type ConnectionModel = entity::docrack_connection::Model;
