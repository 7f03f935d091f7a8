pub use sea_orm_migration::prelude::*;

mod m20251101_000001_docrack_user;
mod m20251101_000002_docrack_rack;
mod m20251101_000003_docrack_equipment;
mod m20251101_000004_docrack_port;
mod m20251101_000005_docrack_connection;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_docrack_user::Migration),
            Box::new(m20251101_000002_docrack_rack::Migration),
            Box::new(m20251101_000003_docrack_equipment::Migration),
            Box::new(m20251101_000004_docrack_port::Migration),
            Box::new(m20251101_000005_docrack_connection::Migration),
        ]
    }
}
