//! `SeaORM` Entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "docrack_connection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub port_a_id: i32,
    #[sea_orm(unique)]
    pub port_b_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::docrack_port::Entity",
        from = "Column::PortAId",
        to = "super::docrack_port::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PortA,
    #[sea_orm(
        belongs_to = "super::docrack_port::Entity",
        from = "Column::PortBId",
        to = "super::docrack_port::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PortB,
}

impl ActiveModelBehavior for ActiveModel {}
