use std::collections::{HashMap, HashSet};

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::port::PortEndpointDto,
    server::{
        data::{
            connection::ConnectionRepository, equipment::EquipmentRepository,
            port::PortRepository, rack::RackRepository,
        },
        error::{inventory::InventoryError, validation::ValidationError, Error},
        model::db::PortModel,
        service::equipment::EquipmentService,
    },
};

/// Split a comma-separated list of port names.
///
/// Names are trimmed and blank entries skipped. At least one name is required and a name may
/// not repeat within the list.
pub fn parse_port_names(raw: &str) -> Result<Vec<String>, ValidationError> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !seen.insert(name) {
            return Err(ValidationError::DuplicatePort(name.to_string()));
        }
        names.push(name.to_string());
    }

    if names.is_empty() {
        return Err(ValidationError::NoPortNames);
    }

    Ok(names)
}

pub struct PortService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PortService<'a> {
    /// Creates a new instance of [`PortService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, port_id: i32) -> Result<PortModel, Error> {
        PortRepository::new(self.db)
            .get_by_id(port_id)
            .await?
            .ok_or_else(|| InventoryError::PortNotFound(port_id).into())
    }

    /// Add ports to an equipment from a comma-separated list of names.
    ///
    /// Either every name is stored or none is.
    pub async fn add_ports(&self, equipment_id: i32, raw_names: &str) -> Result<Vec<PortModel>, Error> {
        let equipment = EquipmentService::new(self.db).get(equipment_id).await?;
        let names = parse_port_names(raw_names)?;

        let existing = PortRepository::new(self.db)
            .get_by_equipment_id(equipment.id)
            .await?;
        if let Some(taken) = names
            .iter()
            .find(|name| existing.iter().any(|port| &port.name == *name))
        {
            return Err(ValidationError::DuplicatePort(taken.clone()).into());
        }

        let txn = self.db.begin().await?;
        let ports = PortRepository::new(&txn)
            .create_many(equipment.id, &names)
            .await?;
        txn.commit().await?;

        tracing::info!(
            equipment_id = %equipment.id,
            "Added {} port(s) to {:?}",
            ports.len(),
            equipment.name
        );

        Ok(ports)
    }

    /// Delete a port and the connection it takes part in.
    pub async fn delete(&self, port_id: i32) -> Result<PortModel, Error> {
        let port = self.get(port_id).await?;

        let txn = self.db.begin().await?;
        ConnectionRepository::new(&txn)
            .delete_by_port_ids(&[port.id])
            .await?;
        PortRepository::new(&txn).delete(port.id).await?;
        txn.commit().await?;

        Ok(port)
    }

    /// Resolve ports to their equipment and rack, keyed by port id.
    ///
    /// Unknown ids are left out of the map.
    pub async fn endpoints(&self, port_ids: &[i32]) -> Result<HashMap<i32, PortEndpointDto>, Error> {
        let ports = PortRepository::new(self.db).get_by_ids(port_ids).await?;

        self.describe(ports).await
    }

    /// Every port that is not part of a connection, ordered by rack, equipment and port name.
    pub async fn free_ports(&self) -> Result<Vec<PortEndpointDto>, Error> {
        let ports = PortRepository::new(self.db).get_all().await?;
        let connections = ConnectionRepository::new(self.db).get_all().await?;

        let used: HashSet<i32> = connections
            .iter()
            .flat_map(|c| [c.port_a_id, c.port_b_id])
            .collect();
        let free = ports.into_iter().filter(|p| !used.contains(&p.id)).collect();

        let mut endpoints: Vec<PortEndpointDto> = self.describe(free).await?.into_values().collect();
        endpoints.sort_by(|a, b| {
            (&a.rack_name, &a.equipment_name, &a.port_name, a.port_id).cmp(&(
                &b.rack_name,
                &b.equipment_name,
                &b.port_name,
                b.port_id,
            ))
        });

        Ok(endpoints)
    }

    async fn describe(&self, ports: Vec<PortModel>) -> Result<HashMap<i32, PortEndpointDto>, Error> {
        let equipment_ids: Vec<i32> = ports.iter().map(|p| p.equipment_id).collect();
        let equipment: HashMap<i32, _> = EquipmentRepository::new(self.db)
            .get_by_ids(&equipment_ids)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();
        let racks: HashMap<i32, _> = RackRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let mut endpoints = HashMap::with_capacity(ports.len());
        for port in ports {
            let Some(owner) = equipment.get(&port.equipment_id) else {
                continue;
            };
            let Some(rack) = racks.get(&owner.rack_id) else {
                continue;
            };

            endpoints.insert(
                port.id,
                PortEndpointDto {
                    port_id: port.id,
                    port_name: port.name,
                    equipment_id: owner.id,
                    equipment_name: owner.name.clone(),
                    rack_id: rack.id,
                    rack_name: rack.name.clone(),
                },
            );
        }

        Ok(endpoints)
    }
}
