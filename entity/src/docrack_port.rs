//! `SeaORM` Entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "docrack_port")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub equipment_id: i32,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::docrack_equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::docrack_equipment::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DocrackEquipment,
}

impl Related<super::docrack_equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocrackEquipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
