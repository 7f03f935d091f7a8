//! `SeaORM` Entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "docrack_equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rack_id: i32,
    pub name: String,
    pub kind: String,
    pub u_position: i32,
    pub u_height: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::docrack_rack::Entity",
        from = "Column::RackId",
        to = "super::docrack_rack::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DocrackRack,
    #[sea_orm(has_many = "super::docrack_port::Entity")]
    DocrackPort,
}

impl Related<super::docrack_rack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocrackRack.def()
    }
}

impl Related<super::docrack_port::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocrackPort.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
