use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "difficulties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::walk::Entity")]
    Walk,
}

impl Related<super::walk::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Walk.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
