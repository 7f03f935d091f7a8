use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_docrack_equipment::DocrackEquipment;

static IDX_PORT_EQUIPMENT_ID: &str = "idx-docrack_port-equipment_id";
static FK_PORT_EQUIPMENT_ID: &str = "fk-docrack_port-equipment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocrackPort::Table)
                    .if_not_exists()
                    .col(pk_auto(DocrackPort::Id))
                    .col(integer(DocrackPort::EquipmentId))
                    .col(string(DocrackPort::Name))
                    .col(timestamp(DocrackPort::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PORT_EQUIPMENT_ID)
                            .from(DocrackPort::Table, DocrackPort::EquipmentId)
                            .to(DocrackEquipment::Table, DocrackEquipment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PORT_EQUIPMENT_ID)
                    .table(DocrackPort::Table)
                    .col(DocrackPort::EquipmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PORT_EQUIPMENT_ID)
                    .table(DocrackPort::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DocrackPort::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocrackPort {
    Table,
    Id,
    EquipmentId,
    Name,
    CreatedAt,
}
