//! Fixtures for service tests: an in-memory SQLite database migrated with
//! the real schema and a small catalog.

use crate::{
    db::create_connection,
    entities::{class_groups, disciplines, laboratories, professors},
};
use chrono::{NaiveDate, NaiveDateTime};
use migration::{Migrator, MigratorTrait};
use models::records::ReservationInput;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

/// Laboratory open on weekdays from 07:00 to 22:00
pub const QUIMICA: i32 = 1;
/// Laboratory without operating hours
pub const INFORMATICA: i32 = 2;
pub const ANA: &str = "111.111.111-11";
pub const BRUNO: &str = "222.222.222-22";
pub const CALCULO: i32 = 1;
pub const TURMA_A: i32 = 1;
pub const TURMA_B: i32 = 2;

/// October 2025; the 20th is a Monday
pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Monday 2025-10-20 08:00
pub fn now() -> NaiveDateTime {
    at(20, 8)
}

pub fn input(laboratory_code: i32, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> ReservationInput {
    ReservationInput {
        starts_at,
        ends_at,
        professor_cpf: ANA.to_string(),
        discipline_code: CALCULO,
        class_code: TURMA_A,
        laboratory_code,
    }
}

pub async fn seeded_db() -> DatabaseConnection {
    // A single connection, every new in-memory connection is a new database
    let db = create_connection("sqlite::memory:", 1).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    for (code, name, hours) in [
        (QUIMICA, "Química", Some("Seg-Sex 07:00-22:00")),
        (INFORMATICA, "Informática", None),
    ] {
        laboratories::ActiveModel {
            code: Set(code),
            name: Set(name.to_string()),
            specialty: Set("Geral".to_string()),
            opening_hours: Set(hours.map(str::to_string)),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    for (cpf, name) in [(BRUNO, "Bruno Lima"), (ANA, "Ana Souza")] {
        professors::ActiveModel {
            cpf: Set(cpf.to_string()),
            name: Set(name.to_string()),
            email: Set(None),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    disciplines::ActiveModel {
        code: Set(CALCULO),
        name: Set("Cálculo I".to_string()),
        credit_hours: Set(Some(60)),
    }
    .insert(&db)
    .await
    .unwrap();

    for (code, name) in [(TURMA_B, "3º B"), (TURMA_A, "3º A")] {
        class_groups::ActiveModel {
            code: Set(code),
            name: Set(name.to_string()),
            year: Set(2025),
            term: Set(Some(2)),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    db
}
