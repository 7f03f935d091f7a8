use sea_orm_migration::{prelude::*, schema::*};

static IDX_RACK_NAME: &str = "idx-docrack_rack-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocrackRack::Table)
                    .if_not_exists()
                    .col(pk_auto(DocrackRack::Id))
                    .col(string(DocrackRack::Name))
                    .col(string_null(DocrackRack::Location))
                    .col(integer(DocrackRack::Height))
                    .col(timestamp(DocrackRack::CreatedAt))
                    .col(timestamp(DocrackRack::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RACK_NAME)
                    .table(DocrackRack::Table)
                    .col(DocrackRack::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RACK_NAME)
                    .table(DocrackRack::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DocrackRack::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocrackRack {
    Table,
    Id,
    Name,
    Location,
    Height,
    CreatedAt,
    UpdatedAt,
}
