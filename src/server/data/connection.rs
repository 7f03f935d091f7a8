use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::ConnectionModel;

pub struct ConnectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectionRepository<'a, C> {
    /// Creates a new instance of [`ConnectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, port_a_id: i32, port_b_id: i32) -> Result<ConnectionModel, DbErr> {
        let connection = entity::docrack_connection::ActiveModel {
            port_a_id: ActiveValue::Set(port_a_id),
            port_b_id: ActiveValue::Set(port_b_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        connection.insert(self.db).await
    }

    /// Finds the connection a port takes part in, on either side
    pub async fn find_by_port_id(&self, port_id: i32) -> Result<Option<ConnectionModel>, DbErr> {
        entity::prelude::DocrackConnection::find()
            .filter(
                Condition::any()
                    .add(entity::docrack_connection::Column::PortAId.eq(port_id))
                    .add(entity::docrack_connection::Column::PortBId.eq(port_id)),
            )
            .one(self.db)
            .await
    }

    /// Returns every connection touching any of the given ports
    pub async fn get_by_port_ids(&self, port_ids: &[i32]) -> Result<Vec<ConnectionModel>, DbErr> {
        if port_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DocrackConnection::find()
            .filter(Self::touches_any(port_ids))
            .order_by_asc(entity::docrack_connection::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<ConnectionModel>, DbErr> {
        entity::prelude::DocrackConnection::find()
            .order_by_asc(entity::docrack_connection::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, connection_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DocrackConnection::delete_by_id(connection_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_port_ids(&self, port_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::DocrackConnection::delete_many()
            .filter(Self::touches_any(port_ids))
            .exec(self.db)
            .await
    }

    fn touches_any(port_ids: &[i32]) -> Condition {
        Condition::any()
            .add(entity::docrack_connection::Column::PortAId.is_in(port_ids.iter().copied()))
            .add(entity::docrack_connection::Column::PortBId.is_in(port_ids.iter().copied()))
    }
}
