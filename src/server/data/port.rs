use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::PortModel;

pub struct PortRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PortRepository<'a, C> {
    /// Creates a new instance of [`PortRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one port per name, in order
    ///
    /// Run inside a transaction when all names must be stored together.
    pub async fn create_many(
        &self,
        equipment_id: i32,
        names: &[String],
    ) -> Result<Vec<PortModel>, DbErr> {
        let mut ports = Vec::with_capacity(names.len());

        for name in names {
            let port = entity::docrack_port::ActiveModel {
                equipment_id: ActiveValue::Set(equipment_id),
                name: ActiveValue::Set(name.clone()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };

            ports.push(port.insert(self.db).await?);
        }

        Ok(ports)
    }

    pub async fn get_by_id(&self, port_id: i32) -> Result<Option<PortModel>, DbErr> {
        entity::prelude::DocrackPort::find_by_id(port_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(&self, port_ids: &[i32]) -> Result<Vec<PortModel>, DbErr> {
        if port_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DocrackPort::find()
            .filter(entity::docrack_port::Column::Id.is_in(port_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Returns the ports of an equipment in creation order
    pub async fn get_by_equipment_id(&self, equipment_id: i32) -> Result<Vec<PortModel>, DbErr> {
        entity::prelude::DocrackPort::find()
            .filter(entity::docrack_port::Column::EquipmentId.eq(equipment_id))
            .order_by_asc(entity::docrack_port::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_equipment_ids(
        &self,
        equipment_ids: &[i32],
    ) -> Result<Vec<PortModel>, DbErr> {
        if equipment_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DocrackPort::find()
            .filter(
                entity::docrack_port::Column::EquipmentId.is_in(equipment_ids.iter().copied()),
            )
            .order_by_asc(entity::docrack_port::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<PortModel>, DbErr> {
        entity::prelude::DocrackPort::find()
            .order_by_asc(entity::docrack_port::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, port_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DocrackPort::delete_by_id(port_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_equipment_ids(
        &self,
        equipment_ids: &[i32],
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::DocrackPort::delete_many()
            .filter(
                entity::docrack_port::Column::EquipmentId.is_in(equipment_ids.iter().copied()),
            )
            .exec(self.db)
            .await
    }
}
