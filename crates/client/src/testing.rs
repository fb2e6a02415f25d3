use chrono::{NaiveDate, NaiveDateTime};
use models::{
    records::{Reservation, ReservationDetails},
    status::ReservationStatus,
};

/// October 2025 at `hour` o'clock
pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// A two-hour reservation of Química by Ana for 3º A
pub fn details(code: i32, day: u32, status: ReservationStatus) -> ReservationDetails {
    ReservationDetails {
        reservation: Reservation {
            code,
            starts_at: at(day, 8),
            ends_at: at(day, 10),
            professor_cpf: "111.111.111-11".to_string(),
            discipline_code: 1,
            class_code: 1,
            laboratory_code: 1,
            status,
            created_at: None,
        },
        professor_name: Some("Ana Souza".to_string()),
        discipline_name: Some("Cálculo I".to_string()),
        class_name: Some("3º A".to_string()),
        laboratory_name: Some("Química".to_string()),
    }
}
