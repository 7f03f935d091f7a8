use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{ConnectionModel, EquipmentModel, PortModel, RackModel},
    TestContext,
};

impl TestContext {
    pub fn rack(&self) -> RackFixtures<'_> {
        RackFixtures { setup: self }
    }
}

pub struct RackFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RackFixtures<'a> {
    pub async fn insert_rack(&self, name: &str, height: i32) -> Result<RackModel, TestError> {
        let now = Utc::now().naive_utc();

        let rack = entity::docrack_rack::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            location: ActiveValue::Set(None),
            height: ActiveValue::Set(height),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(rack.insert(&self.setup.db).await?)
    }

    /// Insert equipment of kind `Switch` occupying `u_position..u_position + u_height`.
    ///
    /// No placement validation is performed, allowing tests to create states the service
    /// layer would refuse.
    pub async fn insert_equipment(
        &self,
        rack_id: i32,
        name: &str,
        u_position: i32,
        u_height: i32,
    ) -> Result<EquipmentModel, TestError> {
        let now = Utc::now().naive_utc();

        let equipment = entity::docrack_equipment::ActiveModel {
            rack_id: ActiveValue::Set(rack_id),
            name: ActiveValue::Set(name.to_string()),
            kind: ActiveValue::Set("Switch".to_string()),
            u_position: ActiveValue::Set(u_position),
            u_height: ActiveValue::Set(u_height),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(equipment.insert(&self.setup.db).await?)
    }

    pub async fn insert_ports(
        &self,
        equipment_id: i32,
        names: &[&str],
    ) -> Result<Vec<PortModel>, TestError> {
        let mut ports = Vec::with_capacity(names.len());

        for name in names {
            let port = entity::docrack_port::ActiveModel {
                equipment_id: ActiveValue::Set(equipment_id),
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };

            ports.push(port.insert(&self.setup.db).await?);
        }

        Ok(ports)
    }

    pub async fn insert_connection(
        &self,
        port_a_id: i32,
        port_b_id: i32,
    ) -> Result<ConnectionModel, TestError> {
        let connection = entity::docrack_connection::ActiveModel {
            port_a_id: ActiveValue::Set(port_a_id),
            port_b_id: ActiveValue::Set(port_b_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(connection.insert(&self.setup.db).await?)
    }

    /// Insert a rack holding two single-U switches, each with one port, cabled together.
    ///
    /// Layout: `switch-a` at U1 with port `eth0`, `switch-b` at U2 with port `eth0`.
    pub async fn insert_cabled_rack(
        &self,
        name: &str,
    ) -> Result<(RackModel, [EquipmentModel; 2], [PortModel; 2], ConnectionModel), TestError> {
        let rack = self.insert_rack(name, 42).await?;
        let switch_a = self.insert_equipment(rack.id, "switch-a", 1, 1).await?;
        let switch_b = self.insert_equipment(rack.id, "switch-b", 2, 1).await?;

        let mut ports_a = self.insert_ports(switch_a.id, &["eth0"]).await?;
        let mut ports_b = self.insert_ports(switch_b.id, &["eth0"]).await?;
        let (port_a, port_b) = (ports_a.remove(0), ports_b.remove(0));

        let connection = self.insert_connection(port_a.id, port_b.id).await?;

        Ok((rack, [switch_a, switch_b], [port_a, port_b], connection))
    }
}
