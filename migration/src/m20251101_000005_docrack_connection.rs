use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_docrack_port::DocrackPort;

static FK_CONNECTION_PORT_A_ID: &str = "fk-docrack_connection-port_a_id";
static FK_CONNECTION_PORT_B_ID: &str = "fk-docrack_connection-port_b_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Unique on each side; a port appearing once as A and once as B is rejected by the service
        manager
            .create_table(
                Table::create()
                    .table(DocrackConnection::Table)
                    .if_not_exists()
                    .col(pk_auto(DocrackConnection::Id))
                    .col(integer_uniq(DocrackConnection::PortAId))
                    .col(integer_uniq(DocrackConnection::PortBId))
                    .col(timestamp(DocrackConnection::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONNECTION_PORT_A_ID)
                            .from(DocrackConnection::Table, DocrackConnection::PortAId)
                            .to(DocrackPort::Table, DocrackPort::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONNECTION_PORT_B_ID)
                            .from(DocrackConnection::Table, DocrackConnection::PortBId)
                            .to(DocrackPort::Table, DocrackPort::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocrackConnection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DocrackConnection {
    Table,
    Id,
    PortAId,
    PortBId,
    CreatedAt,
}
