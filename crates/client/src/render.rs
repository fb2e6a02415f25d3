//! Plain-text screens of the terminal front end.

use crate::{
    dashboard::DashboardStats,
    format::{count, date, date_time, status_icon, status_label, time},
};
use clap::ValueEnum;
use models::{
    hours::OperatingHours,
    records::{Laboratory, ReservationDetails},
};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

fn name(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Normalized hours when the descriptor is readable, as stored otherwise
fn hours(lab: &Laboratory) -> String {
    match lab.opening_hours.as_deref().map(str::trim) {
        None | Some("") => "Sem restrição de horário".to_string(),
        Some(raw) => raw
            .parse::<OperatingHours>()
            .map_or_else(|_| raw.to_string(), |hours| hours.to_string()),
    }
}

pub fn dashboard(stats: &DashboardStats, upcoming: &[&ReservationDetails]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dashboard");
    let _ = writeln!(out, "  Laboratórios: {}", stats.laboratories);
    let _ = writeln!(out, "  Professores:  {}", stats.professors);
    let _ = writeln!(out, "  ⏳ Pendentes:  {}", stats.pending);
    let _ = writeln!(out, "  ✅ Concluídas: {}", stats.completed);
    let _ = writeln!(out, "  ❌ Canceladas: {}", stats.canceled);
    let _ = writeln!(out);
    let _ = writeln!(out, "Próximas reservas");

    if upcoming.is_empty() {
        let _ = writeln!(out, "  Nenhuma reserva pendente.");
    }
    for r in upcoming {
        let _ = writeln!(
            out,
            "  #{} {} {}-{} {} ({})",
            r.reservation.code,
            date(r.reservation.starts_at),
            time(r.reservation.starts_at),
            time(r.reservation.ends_at),
            name(&r.laboratory_name),
            name(&r.professor_name),
        );
    }

    out
}

pub fn laboratories(labs: &[&Laboratory]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", count(labs.len(), "laboratório", "laboratórios", "encontrado"));

    for lab in labs {
        let _ = writeln!(out);
        let _ = writeln!(out, "#{} {}", lab.code, lab.name);
        let _ = writeln!(out, "  Especialidade: {}", lab.specialty);
        let _ = writeln!(out, "  Horário: {}", hours(lab));
    }

    out
}

pub fn reservations(reservations: &[&ReservationDetails], view: ViewMode) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        count(reservations.len(), "reserva", "reservas", "encontrada")
    );

    match view {
        ViewMode::Cards => {
            for r in reservations {
                let status = r.reservation.status;
                let _ = writeln!(out);
                let _ = writeln!(
                    out,
                    "{} · Reserva #{} {} {}",
                    name(&r.laboratory_name),
                    r.reservation.code,
                    status_icon(status),
                    status_label(status)
                );
                let _ = writeln!(
                    out,
                    "  Período: {} {}-{}",
                    date(r.reservation.starts_at),
                    time(r.reservation.starts_at),
                    time(r.reservation.ends_at)
                );
                let _ = writeln!(out, "  Professor: {}", name(&r.professor_name));
                let _ = writeln!(
                    out,
                    "  Disciplina / Turma: {} / {}",
                    name(&r.discipline_name),
                    name(&r.class_name)
                );
            }
        }
        ViewMode::Table => {
            let _ = writeln!(
                out,
                "{:>6}  {:<16}  {:<16}  {:<20}  {:<20}  {:<12}  Status",
                "Código", "Início", "Fim", "Laboratório", "Professor", "Turma"
            );
            for r in reservations {
                let status = r.reservation.status;
                let _ = writeln!(
                    out,
                    "{:>6}  {:<16}  {:<16}  {:<20}  {:<20}  {:<12}  {} {}",
                    r.reservation.code,
                    date_time(r.reservation.starts_at),
                    date_time(r.reservation.ends_at),
                    name(&r.laboratory_name),
                    name(&r.professor_name),
                    name(&r.class_name),
                    status_icon(status),
                    status_label(status)
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::details;
    use models::status::ReservationStatus;

    #[test]
    fn test_cards() {
        let reservation = details(3, 22, ReservationStatus::Pending);
        let out = reservations(&[&reservation], ViewMode::Cards);

        assert!(out.starts_with("1 reserva encontrada\n"));
        assert!(out.contains("Química · Reserva #3 ⏳ Pendente"));
        assert!(out.contains("Período: 22/10/2025 08:00-10:00"));
        assert!(out.contains("Disciplina / Turma: Cálculo I / 3º A"));
    }

    #[test]
    fn test_table() {
        let mut reservation = details(3, 22, ReservationStatus::Canceled);
        reservation.class_name = None;
        let out = reservations(&[&reservation], ViewMode::Table);

        let row = out.lines().nth(2).unwrap();
        assert!(row.contains("22/10/2025 08:00"));
        assert!(row.contains("22/10/2025 10:00"));
        assert!(row.ends_with("❌ Cancelada"));
        assert!(row.contains("  -  "));
    }

    #[test]
    fn test_laboratories_hours() {
        let labs = [
            Laboratory {
                code: 1,
                name: "Química".to_string(),
                specialty: "Ciências".to_string(),
                opening_hours: Some("seg-sex 7h-22h".to_string()),
            },
            Laboratory {
                code: 2,
                name: "Informática".to_string(),
                specialty: "Computação".to_string(),
                opening_hours: None,
            },
        ];
        let out = laboratories(&labs.iter().collect::<Vec<_>>());

        assert!(out.starts_with("2 laboratórios encontrados\n"));
        assert!(out.contains("Horário: Seg-Sex 07:00-22:00"));
        assert!(out.contains("Horário: Sem restrição de horário"));
    }

    #[test]
    fn test_empty_dashboard() {
        let out = dashboard(&DashboardStats::default(), &[]);
        assert!(out.contains("Nenhuma reserva pendente."));
    }
}
