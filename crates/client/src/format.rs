//! pt-BR presentation helpers.

use chrono::NaiveDateTime;
use models::status::ReservationStatus;

/// `dd/mm/aaaa hh:mm`
pub fn date_time(moment: NaiveDateTime) -> String {
    moment.format("%d/%m/%Y %H:%M").to_string()
}

pub fn date(moment: NaiveDateTime) -> String {
    moment.format("%d/%m/%Y").to_string()
}

pub fn time(moment: NaiveDateTime) -> String {
    moment.format("%H:%M").to_string()
}

/// Value of an HTML `datetime-local` input
pub fn input_value(moment: NaiveDateTime) -> String {
    moment.format("%Y-%m-%dT%H:%M").to_string()
}

pub fn status_label(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "Pendente",
        ReservationStatus::Completed => "Concluída",
        ReservationStatus::Canceled => "Cancelada",
    }
}

pub fn status_icon(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "⏳",
        ReservationStatus::Completed => "✅",
        ReservationStatus::Canceled => "❌",
    }
}

/// `1 reserva encontrada`, `3 reservas encontradas`
pub fn count(n: usize, singular: &str, plural: &str, found: &str) -> String {
    if n == 1 {
        format!("{n} {singular} {found}")
    } else {
        format!("{n} {plural} {found}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_pt_br_formats() {
        let moment = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(date_time(moment), "07/03/2025 09:05");
        assert_eq!(date(moment), "07/03/2025");
        assert_eq!(time(moment), "09:05");
        assert_eq!(input_value(moment), "2025-03-07T09:05");
    }

    #[test]
    fn test_status_presentation() {
        assert_eq!(status_icon(ReservationStatus::Pending), "⏳");
        assert_eq!(status_icon(ReservationStatus::Completed), "✅");
        assert_eq!(status_icon(ReservationStatus::Canceled), "❌");
        assert_eq!(status_label(ReservationStatus::Completed), "Concluída");
    }

    #[test]
    fn test_count() {
        assert_eq!(count(1, "reserva", "reservas", "encontrada"), "1 reserva encontrada");
        assert_eq!(count(0, "reserva", "reservas", "encontrada"), "0 reservas encontradas");
        assert_eq!(
            count(2, "laboratório", "laboratórios", "encontrado"),
            "2 laboratórios encontrados"
        );
    }
}
