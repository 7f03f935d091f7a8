pub mod layout;

use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::rack::{EquipmentDto, RackDto, RackSummaryDto},
    server::{
        data::{
            connection::ConnectionRepository, equipment::EquipmentRepository,
            port::PortRepository, rack::RackRepository,
        },
        error::{inventory::InventoryError, validation::ValidationError, Error},
        model::db::{EquipmentModel, RackModel},
        service::rack::layout::{layout, top_u, used_units},
    },
};

/// Height used when the add-rack form leaves it blank.
pub const DEFAULT_RACK_HEIGHT: i32 = 42;
/// Tallest rack accepted.
pub const MAX_RACK_HEIGHT: i32 = 100;

/// Trimmed and checked name, location and height of a rack.
struct RackInput<'a> {
    name: &'a str,
    location: Option<&'a str>,
    height: i32,
}

impl<'a> RackInput<'a> {
    fn parse(name: &'a str, location: &'a str, height: i32) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("Rack name"));
        }

        if !(1..=MAX_RACK_HEIGHT).contains(&height) {
            return Err(ValidationError::RackHeightOutOfRange {
                height,
                max: MAX_RACK_HEIGHT,
            });
        }

        let location = Some(location.trim()).filter(|l| !l.is_empty());

        Ok(Self {
            name,
            location,
            height,
        })
    }
}

pub struct RackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RackService<'a> {
    /// Creates a new instance of [`RackService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Dashboard rows for every rack, ordered by name.
    pub async fn list_summaries(&self) -> Result<Vec<RackSummaryDto>, Error> {
        let racks = RackRepository::new(self.db).get_all().await?;
        let equipment = EquipmentRepository::new(self.db).get_all().await?;

        let mut by_rack: HashMap<i32, Vec<&EquipmentModel>> = HashMap::new();
        for e in &equipment {
            by_rack.entry(e.rack_id).or_default().push(e);
        }

        let summaries = racks
            .into_iter()
            .map(|rack| {
                let mounted = by_rack.remove(&rack.id).unwrap_or_default();
                let used = used_units(&mounted);

                RackSummaryDto {
                    id: rack.id,
                    equipment_count: mounted.len() as u32,
                    used_units: used,
                    free_units: (rack.height - used).max(0),
                    name: rack.name,
                    location: rack.location,
                    height: rack.height,
                }
            })
            .collect();

        Ok(summaries)
    }

    pub async fn get(&self, rack_id: i32) -> Result<RackModel, Error> {
        RackRepository::new(self.db)
            .get_by_id(rack_id)
            .await?
            .ok_or_else(|| InventoryError::RackNotFound(rack_id).into())
    }

    /// Rack with its equipment and diagram slots.
    pub async fn get_rack(&self, rack_id: i32) -> Result<RackDto, Error> {
        let rack = self.get(rack_id).await?;
        let equipment = EquipmentRepository::new(self.db)
            .get_by_rack_id(rack.id)
            .await?;

        Ok(RackDto {
            layout: layout(rack.height, &equipment),
            equipment: equipment.iter().map(EquipmentDto::from).collect(),
            id: rack.id,
            name: rack.name,
            location: rack.location,
            height: rack.height,
        })
    }

    /// Create a rack. A blank location is stored as `None`.
    pub async fn create(&self, name: &str, location: &str, height: i32) -> Result<RackModel, Error> {
        let input = RackInput::parse(name, location, height)?;

        let rack = RackRepository::new(self.db)
            .create(input.name, input.location, input.height)
            .await?;

        tracing::info!(rack_id = %rack.id, "Created rack {:?}", rack.name);

        Ok(rack)
    }

    /// Update a rack, refusing a height below the top unit of any mounted equipment.
    pub async fn update(
        &self,
        rack_id: i32,
        name: &str,
        location: &str,
        height: i32,
    ) -> Result<RackModel, Error> {
        let input = RackInput::parse(name, location, height)?;

        // Written before the check so equipment mounted concurrently is seen.
        let txn = self.db.begin().await?;
        let Some(rack) = RackRepository::new(&txn)
            .update(rack_id, input.name, input.location, input.height)
            .await?
        else {
            return Err(InventoryError::RackNotFound(rack_id).into());
        };

        let equipment = EquipmentRepository::new(&txn)
            .get_by_rack_id(rack.id)
            .await?;
        if let Some(highest) = equipment
            .iter()
            .max_by_key(|e| top_u(e.u_position, e.u_height))
        {
            let highest_u = top_u(highest.u_position, highest.u_height);
            if highest_u > input.height {
                txn.rollback().await?;
                return Err(ValidationError::RackTooLow {
                    height: input.height,
                    name: highest.name.clone(),
                    top_u: highest_u,
                }
                .into());
            }
        }
        txn.commit().await?;

        Ok(rack)
    }

    /// Delete a rack together with its equipment, their ports and every connection on them.
    pub async fn delete(&self, rack_id: i32) -> Result<RackModel, Error> {
        let rack = self.get(rack_id).await?;

        let txn = self.db.begin().await?;

        let equipment_ids: Vec<i32> = EquipmentRepository::new(&txn)
            .get_by_rack_id(rack.id)
            .await?
            .iter()
            .map(|e| e.id)
            .collect();
        let port_ids: Vec<i32> = PortRepository::new(&txn)
            .get_by_equipment_ids(&equipment_ids)
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        let connections = ConnectionRepository::new(&txn)
            .delete_by_port_ids(&port_ids)
            .await?;
        PortRepository::new(&txn)
            .delete_by_equipment_ids(&equipment_ids)
            .await?;
        EquipmentRepository::new(&txn)
            .delete_by_rack_id(rack.id)
            .await?;
        RackRepository::new(&txn).delete(rack.id).await?;

        txn.commit().await?;

        tracing::info!(
            rack_id = %rack.id,
            equipment = equipment_ids.len(),
            ports = port_ids.len(),
            connections = connections.rows_affected,
            "Deleted rack {:?}",
            rack.name
        );

        Ok(rack)
    }
}
