//! `SeaORM` Entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "docrack_rack")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub height: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::docrack_equipment::Entity")]
    DocrackEquipment,
}

impl Related<super::docrack_equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocrackEquipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
