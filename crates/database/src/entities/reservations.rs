use models::{records::Reservation, rules::Booking, status::ReservationStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub code: i32,
    pub starts_at: DateTime,
    pub ends_at: DateTime,
    pub professor_cpf: String,
    pub discipline_code: i32,
    pub class_code: i32,
    pub laboratory_code: i32,
    pub status: ReservationStatus,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::laboratories::Entity",
        from = "Column::LaboratoryCode",
        to = "super::laboratories::Column::Code"
    )]
    Laboratory,
    #[sea_orm(
        belongs_to = "super::professors::Entity",
        from = "Column::ProfessorCpf",
        to = "super::professors::Column::Cpf"
    )]
    Professor,
    #[sea_orm(
        belongs_to = "super::disciplines::Entity",
        from = "Column::DisciplineCode",
        to = "super::disciplines::Column::Code"
    )]
    Discipline,
    #[sea_orm(
        belongs_to = "super::class_groups::Entity",
        from = "Column::ClassCode",
        to = "super::class_groups::Column::Code"
    )]
    ClassGroup,
}

impl Related<super::laboratories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Laboratory.def()
    }
}

impl Related<super::professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::disciplines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discipline.def()
    }
}

impl Related<super::class_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Reservation {
    fn from(model: Model) -> Self {
        Self {
            code: model.code,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            professor_cpf: model.professor_cpf,
            discipline_code: model.discipline_code,
            class_code: model.class_code,
            laboratory_code: model.laboratory_code,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

impl From<&Model> for Booking {
    fn from(model: &Model) -> Self {
        Self {
            code: model.code,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            laboratory_code: model.laboratory_code,
            professor_cpf: model.professor_cpf.clone(),
            class_code: model.class_code,
            status: model.status,
        }
    }
}
