use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocrackUser::Table)
                    .if_not_exists()
                    .col(pk_auto(DocrackUser::Id))
                    .col(string_uniq(DocrackUser::Username))
                    .col(string(DocrackUser::PasswordHash))
                    .col(string(DocrackUser::Theme))
                    .col(timestamp(DocrackUser::CreatedAt))
                    .col(timestamp(DocrackUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocrackUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocrackUser {
    Table,
    Id,
    Username,
    PasswordHash,
    Theme,
    CreatedAt,
    UpdatedAt,
}
