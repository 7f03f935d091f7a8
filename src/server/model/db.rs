//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models from the `entity` crate, giving a single
//! point of reference for model types across repositories and services, plus conversions into
//! the DTOs the views and API serve.

use crate::model::{rack::EquipmentDto, user::UserDto};

/// DocRack user account.
///
/// # Fields (from `entity::docrack_user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name
/// - `password_hash` - bcrypt hash of the password
/// - `theme` - Preferred colour scheme (`system`, `light` or `dark`)
/// - `created_at` / `updated_at` - Record timestamps
pub type UserModel = entity::docrack_user::Model;

/// A physical rack.
///
/// # Fields (from `entity::docrack_rack::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `location` - Optional free-text location (room, row)
/// - `height` - Number of rack units
/// - `created_at` / `updated_at` - Record timestamps
pub type RackModel = entity::docrack_rack::Model;

/// Equipment mounted in a rack.
///
/// # Fields (from `entity::docrack_equipment::Model`)
/// - `id` - Primary key
/// - `rack_id` - Foreign key to the rack
/// - `name` - Display name
/// - `kind` - Free-text type such as "Switch" or "Server"
/// - `u_position` - Lowest occupied rack unit, starting at 1
/// - `u_height` - Number of rack units occupied
/// - `created_at` / `updated_at` - Record timestamps
pub type EquipmentModel = entity::docrack_equipment::Model;

/// A named port on a piece of equipment.
pub type PortModel = entity::docrack_port::Model;

/// A cable between two ports.
pub type ConnectionModel = entity::docrack_connection::Model;

impl From<&EquipmentModel> for EquipmentDto {
    fn from(model: &EquipmentModel) -> Self {
        Self {
            id: model.id,
            rack_id: model.rack_id,
            name: model.name.clone(),
            kind: model.kind.clone(),
            u_position: model.u_position,
            u_height: model.u_height,
            top_u: crate::server::service::rack::layout::top_u(model.u_position, model.u_height),
        }
    }
}

impl From<&UserModel> for UserDto {
    /// An unrecognised stored theme falls back to the default.
    fn from(model: &UserModel) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            theme: model.theme.parse().unwrap_or_default(),
        }
    }
}
