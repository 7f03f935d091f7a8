//! Rack diagram layout.
//!
//! Turns a rack height and its mounted equipment into the list of slots drawn on the rack page,
//! starting at the top unit. Each piece of equipment appears once, spanning its height, and every
//! free unit appears on its own.

use crate::{
    model::rack::{EquipmentDto, RackSlotDto},
    server::model::db::EquipmentModel,
};

/// Highest rack unit occupied by equipment mounted at `u_position` with `u_height` units.
pub fn top_u(u_position: i32, u_height: i32) -> i32 {
    u_position.saturating_add(u_height.max(1) - 1)
}

/// Build the rack diagram slots from the top unit down to U1.
///
/// Equipment extending above `height` is never drawn; the placement rules keep that from
/// happening for stored data.
pub fn layout(height: i32, equipment: &[EquipmentModel]) -> Vec<RackSlotDto> {
    let mut slots = Vec::new();
    let mut u = height;

    while u >= 1 {
        match equipment
            .iter()
            .find(|e| top_u(e.u_position, e.u_height) == u)
        {
            Some(mounted) => {
                slots.push(RackSlotDto::Equipment {
                    top_u: u,
                    equipment: EquipmentDto::from(mounted),
                });
                u -= mounted.u_height.max(1);
            }
            None => {
                slots.push(RackSlotDto::Empty { u });
                u -= 1;
            }
        }
    }

    slots
}

/// Number of rack units occupied by the given equipment.
pub fn used_units(equipment: &[&EquipmentModel]) -> i32 {
    equipment.iter().map(|e| e.u_height).sum()
}
