use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard row for a rack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RackSummaryDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    /// Total height in rack units
    pub height: i32,
    pub equipment_count: u32,
    /// Rack units occupied by equipment
    pub used_units: i32,
    pub free_units: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentDto {
    pub id: i32,
    pub rack_id: i32,
    pub name: String,
    pub kind: String,
    /// Lowest rack unit occupied, starting at 1
    pub u_position: i32,
    pub u_height: i32,
    /// Highest rack unit occupied
    pub top_u: i32,
}

/// One entry of a rack diagram, listed from the top of the rack down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RackSlotDto {
    /// Equipment spanning `equipment.u_height` units with its top at `top_u`
    Equipment { top_u: i32, equipment: EquipmentDto },
    /// A single free rack unit
    Empty { u: i32 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RackDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub height: i32,
    /// Equipment ordered from the top of the rack down
    pub equipment: Vec<EquipmentDto>,
    pub layout: Vec<RackSlotDto>,
}
