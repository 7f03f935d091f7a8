//! Factory functions for generating in-memory database models.
//!
//! These models are never written to the database, making them suitable for unit tests of
//! pure functions such as rack layout and placement checks.

use chrono::Utc;

use crate::model::{EquipmentModel, RackModel};

/// Create a rack model with the given ID and height.
pub fn mock_rack_model(id: i32, height: i32) -> RackModel {
    let now = Utc::now().naive_utc();
    RackModel {
        id,
        name: format!("Rack {}", id),
        location: None,
        height,
        created_at: now,
        updated_at: now,
    }
}

/// Create an equipment model occupying `u_position..u_position + u_height` in rack `rack_id`.
pub fn mock_equipment_model(
    id: i32,
    rack_id: i32,
    u_position: i32,
    u_height: i32,
) -> EquipmentModel {
    let now = Utc::now().naive_utc();
    EquipmentModel {
        id,
        rack_id,
        name: format!("Equipment {}", id),
        kind: "Server".to_string(),
        u_position,
        u_height,
        created_at: now,
        updated_at: now,
    }
}
