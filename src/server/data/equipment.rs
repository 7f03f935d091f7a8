use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::EquipmentModel;

/// Editable columns of an equipment row
#[derive(Clone, Debug, PartialEq)]
pub struct EquipmentFields<'a> {
    pub name: &'a str,
    pub kind: &'a str,
    pub u_position: i32,
    pub u_height: i32,
}

pub struct EquipmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    /// Creates a new instance of [`EquipmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        rack_id: i32,
        fields: &EquipmentFields<'_>,
    ) -> Result<EquipmentModel, DbErr> {
        let now = Utc::now().naive_utc();
        let equipment = entity::docrack_equipment::ActiveModel {
            rack_id: ActiveValue::Set(rack_id),
            name: ActiveValue::Set(fields.name.to_string()),
            kind: ActiveValue::Set(fields.kind.to_string()),
            u_position: ActiveValue::Set(fields.u_position),
            u_height: ActiveValue::Set(fields.u_height),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        equipment.insert(self.db).await
    }

    pub async fn get_by_id(&self, equipment_id: i32) -> Result<Option<EquipmentModel>, DbErr> {
        entity::prelude::DocrackEquipment::find_by_id(equipment_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(&self, equipment_ids: &[i32]) -> Result<Vec<EquipmentModel>, DbErr> {
        if equipment_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DocrackEquipment::find()
            .filter(entity::docrack_equipment::Column::Id.is_in(equipment_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Returns the equipment mounted in a rack, highest position first
    pub async fn get_by_rack_id(&self, rack_id: i32) -> Result<Vec<EquipmentModel>, DbErr> {
        entity::prelude::DocrackEquipment::find()
            .filter(entity::docrack_equipment::Column::RackId.eq(rack_id))
            .order_by_desc(entity::docrack_equipment::Column::UPosition)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<EquipmentModel>, DbErr> {
        entity::prelude::DocrackEquipment::find()
            .order_by_asc(entity::docrack_equipment::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the editable fields, returning `None` if the equipment does not exist
    pub async fn update(
        &self,
        equipment_id: i32,
        fields: &EquipmentFields<'_>,
    ) -> Result<Option<EquipmentModel>, DbErr> {
        let Some(equipment) = self.get_by_id(equipment_id).await? else {
            return Ok(None);
        };

        let mut equipment_am = equipment.into_active_model();
        equipment_am.name = ActiveValue::Set(fields.name.to_string());
        equipment_am.kind = ActiveValue::Set(fields.kind.to_string());
        equipment_am.u_position = ActiveValue::Set(fields.u_position);
        equipment_am.u_height = ActiveValue::Set(fields.u_height);
        equipment_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(equipment_am.update(self.db).await?))
    }

    pub async fn delete(&self, equipment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DocrackEquipment::delete_by_id(equipment_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_rack_id(&self, rack_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DocrackEquipment::delete_many()
            .filter(entity::docrack_equipment::Column::RackId.eq(rack_id))
            .exec(self.db)
            .await
    }
}
