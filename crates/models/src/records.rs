//! JSON shapes exchanged between the API and its clients. Field names on the
//! wire are the Portuguese ones the front end has always used.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::status::ReservationStatus;

/// A physical laboratory that can be reserved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Laboratory {
    #[serde(rename = "codigo")]
    pub code: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especialidade")]
    pub specialty: String,
    /// Operating-hours descriptor, e.g. `Seg-Sex 07:00-22:00`
    #[serde(rename = "horario_funcionamento", default)]
    pub opening_hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Professor {
    pub cpf: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Discipline {
    #[serde(rename = "codigo")]
    pub code: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "carga_horaria", default)]
    pub credit_hours: Option<i32>,
}

/// A class (turma) of students
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassGroup {
    #[serde(rename = "codigo")]
    pub code: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "semestre", default)]
    pub term: Option<i32>,
}

/// A reservation row as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Reservation {
    #[serde(rename = "codigo")]
    pub code: i32,
    #[serde(rename = "data_hora_inicio", with = "crate::timestamp")]
    pub starts_at: NaiveDateTime,
    #[serde(rename = "data_hora_fim", with = "crate::timestamp")]
    pub ends_at: NaiveDateTime,
    #[serde(rename = "cpf_professor")]
    pub professor_cpf: String,
    #[serde(rename = "cod_disciplina")]
    pub discipline_code: i32,
    #[serde(rename = "cod_turma")]
    pub class_code: i32,
    #[serde(rename = "cod_laboratorio")]
    pub laboratory_code: i32,
    pub status: ReservationStatus,
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<NaiveDateTime>,
}

/// A reservation joined with the names of everything it references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReservationDetails {
    #[serde(flatten)]
    pub reservation: Reservation,
    #[serde(rename = "professor_nome", default)]
    pub professor_name: Option<String>,
    #[serde(rename = "disciplina_nome", default)]
    pub discipline_name: Option<String>,
    #[serde(rename = "turma_nome", default)]
    pub class_name: Option<String>,
    #[serde(rename = "laboratorio_nome", default)]
    pub laboratory_name: Option<String>,
}

/// The six writable fields of a reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReservationInput {
    #[serde(rename = "data_hora_inicio", with = "crate::timestamp")]
    pub starts_at: NaiveDateTime,
    #[serde(rename = "data_hora_fim", with = "crate::timestamp")]
    pub ends_at: NaiveDateTime,
    #[serde(rename = "cpf_professor")]
    pub professor_cpf: String,
    #[serde(rename = "cod_disciplina")]
    pub discipline_code: i32,
    #[serde(rename = "cod_turma")]
    pub class_code: i32,
    #[serde(rename = "cod_laboratorio")]
    pub laboratory_code: i32,
}

impl From<&Reservation> for ReservationInput {
    fn from(reservation: &Reservation) -> Self {
        Self {
            starts_at: reservation.starts_at,
            ends_at: reservation.ends_at,
            professor_cpf: reservation.professor_cpf.clone(),
            discipline_code: reservation.discipline_code,
            class_code: reservation.class_code,
            laboratory_code: reservation.laboratory_code,
        }
    }
}

/// Body returned after a hard delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteConfirmation {
    pub message: String,
    #[serde(rename = "codigo")]
    pub code: i32,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    pub error: String,
}
