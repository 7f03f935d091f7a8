use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::port::ConnectionDto,
    server::{
        data::connection::ConnectionRepository,
        error::{validation::ValidationError, Error},
        model::db::{ConnectionModel, PortModel},
        service::port::PortService,
    },
};

pub struct ConnectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionService<'a> {
    /// Creates a new instance of [`ConnectionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cable two ports together.
    ///
    /// Both ports must exist, differ and be free.
    pub async fn connect(
        &self,
        port_id: i32,
        target_port_id: i32,
    ) -> Result<ConnectionModel, Error> {
        let port_service = PortService::new(self.db);
        let port = port_service.get(port_id).await?;
        let target = port_service.get(target_port_id).await?;

        if port.id == target.id {
            return Err(ValidationError::SelfConnection.into());
        }

        let connection_repo = ConnectionRepository::new(self.db);
        for p in [&port, &target] {
            if connection_repo.find_by_port_id(p.id).await?.is_some() {
                return Err(ValidationError::PortAlreadyConnected(p.name.clone()).into());
            }
        }

        // A port may sit on either side of a row; recheck after inserting.
        let txn = self.db.begin().await?;
        let connection_repo = ConnectionRepository::new(&txn);
        let connection = connection_repo.create(port.id, target.id).await?;

        let touching = connection_repo.get_by_port_ids(&[port.id, target.id]).await?;
        for p in [&port, &target] {
            let uses = touching
                .iter()
                .filter(|c| c.port_a_id == p.id || c.port_b_id == p.id)
                .count();
            if uses > 1 {
                txn.rollback().await?;
                return Err(ValidationError::PortAlreadyConnected(p.name.clone()).into());
            }
        }
        txn.commit().await?;

        tracing::info!(
            connection_id = %connection.id,
            "Connected port {} to port {}",
            port.id,
            target.id
        );

        Ok(connection)
    }

    /// Remove the connection a port takes part in.
    pub async fn disconnect(&self, port_id: i32) -> Result<PortModel, Error> {
        let port = PortService::new(self.db).get(port_id).await?;

        let connection_repo = ConnectionRepository::new(self.db);
        let Some(connection) = connection_repo.find_by_port_id(port.id).await? else {
            return Err(ValidationError::PortNotConnected(port.name).into());
        };
        connection_repo.delete(connection.id).await?;

        tracing::info!(connection_id = %connection.id, "Removed connection");

        Ok(port)
    }

    /// Every connection with both endpoints resolved.
    pub async fn list(&self) -> Result<Vec<ConnectionDto>, Error> {
        let connections = ConnectionRepository::new(self.db).get_all().await?;
        let port_ids: Vec<i32> = connections
            .iter()
            .flat_map(|c| [c.port_a_id, c.port_b_id])
            .collect();
        let mut endpoints = PortService::new(self.db).endpoints(&port_ids).await?;

        let mut list = Vec::with_capacity(connections.len());
        for connection in connections {
            let (Some(a), Some(b)) = (
                endpoints.remove(&connection.port_a_id),
                endpoints.remove(&connection.port_b_id),
            ) else {
                return Err(Error::InternalError(format!(
                    "Connection {} references a missing port",
                    connection.id
                )));
            };

            list.push(ConnectionDto {
                id: connection.id,
                a,
                b,
            });
        }

        Ok(list)
    }
}
