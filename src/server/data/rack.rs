use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::db::RackModel;

pub struct RackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RackRepository<'a, C> {
    /// Creates a new instance of [`RackRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        location: Option<&str>,
        height: i32,
    ) -> Result<RackModel, DbErr> {
        let now = Utc::now().naive_utc();
        let rack = entity::docrack_rack::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            location: ActiveValue::Set(location.map(str::to_string)),
            height: ActiveValue::Set(height),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        rack.insert(self.db).await
    }

    pub async fn get_by_id(&self, rack_id: i32) -> Result<Option<RackModel>, DbErr> {
        entity::prelude::DocrackRack::find_by_id(rack_id)
            .one(self.db)
            .await
    }

    /// Returns every rack ordered by name, ties broken by id
    pub async fn get_all(&self) -> Result<Vec<RackModel>, DbErr> {
        entity::prelude::DocrackRack::find()
            .order_by_asc(entity::docrack_rack::Column::Name)
            .order_by_asc(entity::docrack_rack::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates name, location and height, returning `None` if the rack does not exist
    pub async fn update(
        &self,
        rack_id: i32,
        name: &str,
        location: Option<&str>,
        height: i32,
    ) -> Result<Option<RackModel>, DbErr> {
        let Some(rack) = self.get_by_id(rack_id).await? else {
            return Ok(None);
        };

        let mut rack_am = rack.into_active_model();
        rack_am.name = ActiveValue::Set(name.to_string());
        rack_am.location = ActiveValue::Set(location.map(str::to_string));
        rack_am.height = ActiveValue::Set(height);
        rack_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(rack_am.update(self.db).await?))
    }

    pub async fn delete(&self, rack_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DocrackRack::delete_by_id(rack_id)
            .exec(self.db)
            .await
    }
}
