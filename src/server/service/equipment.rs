use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::{
        port::{EquipmentDetailDto, PortDto, PortLinkDto},
        rack::EquipmentDto,
    },
    server::{
        data::{
            connection::ConnectionRepository,
            equipment::{EquipmentFields, EquipmentRepository},
            port::PortRepository,
            rack::RackRepository,
        },
        error::{inventory::InventoryError, validation::ValidationError, Error},
        model::db::{EquipmentModel, RackModel},
        service::{port::PortService, rack::layout::top_u, rack::RackService},
    },
};

/// Check that equipment fits inside the rack without overlapping anything already mounted.
///
/// `exclude_id` skips the equipment being edited so it does not collide with itself.
pub fn check_placement(
    rack: &RackModel,
    mounted: &[EquipmentModel],
    fields: &EquipmentFields<'_>,
    exclude_id: Option<i32>,
) -> Result<(), ValidationError> {
    if fields.u_position < 1 {
        return Err(ValidationError::InvalidUnitPosition(fields.u_position));
    }
    if fields.u_height < 1 {
        return Err(ValidationError::InvalidUnitHeight(fields.u_height));
    }

    let bottom_u = fields.u_position;
    let top = top_u(fields.u_position, fields.u_height);
    if top > rack.height {
        return Err(ValidationError::ExceedsRack {
            name: fields.name.to_string(),
            top_u: top,
            height: rack.height,
        });
    }

    let collision = mounted
        .iter()
        .filter(|other| Some(other.id) != exclude_id)
        .find(|other| bottom_u <= top_u(other.u_position, other.u_height) && other.u_position <= top);

    match collision {
        Some(other) => Err(ValidationError::Overlap {
            bottom_u,
            top_u: top,
            other: other.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Trim name and kind, rejecting a blank name.
fn normalize<'f>(fields: &EquipmentFields<'f>) -> Result<EquipmentFields<'f>, ValidationError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField("Equipment name"));
    }

    Ok(EquipmentFields {
        name,
        kind: fields.kind.trim(),
        u_position: fields.u_position,
        u_height: fields.u_height,
    })
}

pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    /// Creates a new instance of [`EquipmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, equipment_id: i32) -> Result<EquipmentModel, Error> {
        EquipmentRepository::new(self.db)
            .get_by_id(equipment_id)
            .await?
            .ok_or_else(|| InventoryError::EquipmentNotFound(equipment_id).into())
    }

    /// Equipment with its rack name and every port's connection peer.
    pub async fn get_detail(&self, equipment_id: i32) -> Result<EquipmentDetailDto, Error> {
        let equipment = self.get(equipment_id).await?;
        let rack = RackService::new(self.db).get(equipment.rack_id).await?;

        let ports = PortRepository::new(self.db)
            .get_by_equipment_id(equipment.id)
            .await?;
        let port_ids: Vec<i32> = ports.iter().map(|p| p.id).collect();
        let connections = ConnectionRepository::new(self.db)
            .get_by_port_ids(&port_ids)
            .await?;

        // port id -> (connection id, peer port id)
        let mut links: HashMap<i32, (i32, i32)> = HashMap::new();
        for connection in &connections {
            links.insert(connection.port_a_id, (connection.id, connection.port_b_id));
            links.insert(connection.port_b_id, (connection.id, connection.port_a_id));
        }

        let peer_ids: Vec<i32> = port_ids
            .iter()
            .filter_map(|id| links.get(id).map(|(_, peer)| *peer))
            .collect();
        let mut endpoints = PortService::new(self.db).endpoints(&peer_ids).await?;

        let ports = ports
            .into_iter()
            .map(|port| {
                let connection = links.get(&port.id).and_then(|(connection_id, peer_id)| {
                    endpoints.remove(peer_id).map(|peer| PortLinkDto {
                        connection_id: *connection_id,
                        peer,
                    })
                });

                PortDto {
                    id: port.id,
                    name: port.name,
                    connection,
                }
            })
            .collect();

        Ok(EquipmentDetailDto {
            equipment: EquipmentDto::from(&equipment),
            rack_name: rack.name,
            ports,
        })
    }

    /// Mount new equipment in a rack after checking fit and overlap.
    pub async fn create(
        &self,
        rack_id: i32,
        fields: &EquipmentFields<'_>,
    ) -> Result<EquipmentModel, Error> {
        let fields = normalize(fields)?;
        let rack = RackService::new(self.db).get(rack_id).await?;

        // Written before the check so concurrent mounts into the rack see each other's rows.
        let txn = self.db.begin().await?;
        let equipment_repo = EquipmentRepository::new(&txn);
        let equipment = equipment_repo.create(rack.id, &fields).await?;

        let rack = Self::rack_in(&txn, rack.id).await?;
        let mounted = equipment_repo.get_by_rack_id(rack.id).await?;
        if let Err(err) = check_placement(&rack, &mounted, &fields, Some(equipment.id)) {
            txn.rollback().await?;
            return Err(err.into());
        }
        txn.commit().await?;

        tracing::info!(
            rack_id = %rack.id,
            equipment_id = %equipment.id,
            "Mounted {:?} at U{}-U{}",
            equipment.name,
            equipment.u_position,
            top_u(equipment.u_position, equipment.u_height)
        );

        Ok(equipment)
    }

    /// Update equipment within its rack; its own current range does not count as an overlap.
    pub async fn update(
        &self,
        equipment_id: i32,
        fields: &EquipmentFields<'_>,
    ) -> Result<EquipmentModel, Error> {
        let fields = normalize(fields)?;
        let equipment = self.get(equipment_id).await?;

        let txn = self.db.begin().await?;
        let equipment_repo = EquipmentRepository::new(&txn);
        let Some(updated) = equipment_repo.update(equipment.id, &fields).await? else {
            return Err(InventoryError::EquipmentNotFound(equipment_id).into());
        };

        let rack = Self::rack_in(&txn, updated.rack_id).await?;
        let mounted = equipment_repo.get_by_rack_id(rack.id).await?;
        if let Err(err) = check_placement(&rack, &mounted, &fields, Some(updated.id)) {
            txn.rollback().await?;
            return Err(err.into());
        }
        txn.commit().await?;

        Ok(updated)
    }

    /// Re-read the rack inside a write transaction so its height is current.
    async fn rack_in(txn: &DatabaseTransaction, rack_id: i32) -> Result<RackModel, Error> {
        RackRepository::new(txn)
            .get_by_id(rack_id)
            .await?
            .ok_or_else(|| InventoryError::RackNotFound(rack_id).into())
    }

    /// Delete equipment together with its ports and their connections.
    pub async fn delete(&self, equipment_id: i32) -> Result<EquipmentModel, Error> {
        let equipment = self.get(equipment_id).await?;

        let txn = self.db.begin().await?;

        let port_ids: Vec<i32> = PortRepository::new(&txn)
            .get_by_equipment_id(equipment.id)
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        ConnectionRepository::new(&txn)
            .delete_by_port_ids(&port_ids)
            .await?;
        PortRepository::new(&txn)
            .delete_by_equipment_ids(&[equipment.id])
            .await?;
        EquipmentRepository::new(&txn).delete(equipment.id).await?;

        txn.commit().await?;

        tracing::info!(
            rack_id = %equipment.rack_id,
            equipment_id = %equipment.id,
            "Deleted equipment {:?}",
            equipment.name
        );

        Ok(equipment)
    }
}
