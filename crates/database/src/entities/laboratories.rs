use models::records::Laboratory;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "laboratories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub code: i32,
    pub name: String,
    pub specialty: String,
    pub opening_hours: Option<String>, // e.g. "Seg-Sex 07:00-22:00"
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Laboratory {
    fn from(model: Model) -> Self {
        Self {
            code: model.code,
            name: model.name,
            specialty: model.specialty,
            opening_hours: model.opening_hours,
        }
    }
}
