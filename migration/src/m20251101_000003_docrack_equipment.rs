use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_docrack_rack::DocrackRack;

static IDX_EQUIPMENT_RACK_ID: &str = "idx-docrack_equipment-rack_id";
static FK_EQUIPMENT_RACK_ID: &str = "fk-docrack_equipment-rack_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys to an existing table, so they are declared inline
        manager
            .create_table(
                Table::create()
                    .table(DocrackEquipment::Table)
                    .if_not_exists()
                    .col(pk_auto(DocrackEquipment::Id))
                    .col(integer(DocrackEquipment::RackId))
                    .col(string(DocrackEquipment::Name))
                    .col(string(DocrackEquipment::Kind))
                    .col(integer(DocrackEquipment::UPosition))
                    .col(integer(DocrackEquipment::UHeight))
                    .col(timestamp(DocrackEquipment::CreatedAt))
                    .col(timestamp(DocrackEquipment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EQUIPMENT_RACK_ID)
                            .from(DocrackEquipment::Table, DocrackEquipment::RackId)
                            .to(DocrackRack::Table, DocrackRack::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_RACK_ID)
                    .table(DocrackEquipment::Table)
                    .col(DocrackEquipment::RackId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EQUIPMENT_RACK_ID)
                    .table(DocrackEquipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DocrackEquipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocrackEquipment {
    Table,
    Id,
    RackId,
    Name,
    Kind,
    UPosition,
    UHeight,
    CreatedAt,
    UpdatedAt,
}
