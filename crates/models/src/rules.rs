//! Reservation admissibility rules.
//!
//! Every write to a reservation goes through [`ReservationPolicy::evaluate`]
//! (or [`ReservationPolicy::check_cancel`] for cancellations). The checks run
//! in a fixed order so the first broken rule is the one reported.

use chrono::{NaiveDateTime, TimeDelta};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use thiserror::Error;

use crate::{hours::OperatingHours, records::ReservationInput, status::ReservationStatus};

/// A business rule a proposed reservation breaks. The message is the text
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("A data/hora de início deve ser anterior à data/hora de fim.")]
    InvertedInterval,
    #[error("Status inválido.")]
    InvalidStatus,
    #[error("Não é possível alterar reserva concluída.")]
    CompletedReservation,
    #[error("Apenas reservas pendentes podem ser canceladas.")]
    NotPending,
    #[error("A reserva deve ser solicitada com pelo menos {hours} horas de antecedência.")]
    InsufficientLeadTime { hours: i64 },
    #[error("Reserva fora do horário de funcionamento do laboratório.")]
    OutsideOperatingHours,
    #[error("O laboratório já está reservado neste intervalo.")]
    LaboratoryOccupied,
    #[error("Reserva duplicada para o mesmo professor e turma.")]
    DuplicateProfessorClass,
    #[error("Laboratório não encontrado.")]
    UnknownLaboratory,
    #[error("Professor não encontrado.")]
    UnknownProfessor,
    #[error("Disciplina não encontrada.")]
    UnknownDiscipline,
    #[error("Turma não encontrada.")]
    UnknownClass,
}

/// Whether the half-open intervals `[a_start, a_end)` and `[b_start, b_end)`
/// intersect. Back-to-back intervals do not.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// What the cancel operation accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CancelPolicy {
    /// Pending reservations are canceled, canceled ones are returned as they
    /// are, completed ones are rejected
    #[default]
    Idempotent,
    /// Only pending reservations may be canceled
    PendingOnly,
}

impl FromStr for CancelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "idempotent" => Ok(Self::Idempotent),
            "pending-only" | "pending_only" => Ok(Self::PendingOnly),
            other => Err(format!(
                "unknown cancel policy `{other}` (expected `idempotent` or `pending-only`)"
            )),
        }
    }
}

impl Display for CancelPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Idempotent => write!(f, "idempotent"),
            Self::PendingOnly => write!(f, "pending-only"),
        }
    }
}

/// The slot a create or update wants to occupy
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub laboratory_code: i32,
    pub professor_cpf: &'a str,
    pub class_code: i32,
}

impl<'a> From<&'a ReservationInput> for Slot<'a> {
    fn from(input: &'a ReservationInput) -> Self {
        Self {
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            laboratory_code: input.laboratory_code,
            professor_cpf: &input.professor_cpf,
            class_code: input.class_code,
        }
    }
}

/// A reservation already on the books, as far as the rules care
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub code: i32,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub laboratory_code: i32,
    pub professor_cpf: String,
    pub class_code: i32,
    pub status: ReservationStatus,
}

impl Booking {
    fn collides_with(&self, slot: &Slot<'_>) -> bool {
        self.status == ReservationStatus::Pending
            && overlaps(self.starts_at, self.ends_at, slot.starts_at, slot.ends_at)
    }
}

/// Tunable parts of the rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationPolicy {
    /// Minimum delay between the request and the reservation start
    pub lead_time: TimeDelta,
    pub cancel: CancelPolicy,
}

impl Default for ReservationPolicy {
    fn default() -> Self {
        Self {
            lead_time: TimeDelta::hours(24),
            cancel: CancelPolicy::default(),
        }
    }
}

impl ReservationPolicy {
    pub fn check_interval(slot: &Slot<'_>) -> Result<(), RuleViolation> {
        if slot.starts_at < slot.ends_at {
            Ok(())
        } else {
            Err(RuleViolation::InvertedInterval)
        }
    }

    pub fn check_mutable(status: ReservationStatus) -> Result<(), RuleViolation> {
        match status {
            ReservationStatus::Completed => Err(RuleViolation::CompletedReservation),
            _ => Ok(()),
        }
    }

    pub fn check_lead_time(
        &self,
        starts_at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<(), RuleViolation> {
        if starts_at - now >= self.lead_time {
            Ok(())
        } else {
            Err(RuleViolation::InsufficientLeadTime {
                hours: self.lead_time.num_hours(),
            })
        }
    }

    pub fn check_operating_hours(
        hours: Option<&OperatingHours>,
        starts_at: NaiveDateTime,
    ) -> Result<(), RuleViolation> {
        match hours {
            Some(hours) if !hours.admits(starts_at) => Err(RuleViolation::OutsideOperatingHours),
            _ => Ok(()),
        }
    }

    /// Checks the slot against pending bookings, skipping the reservation
    /// being edited. A lab collision wins over a professor/class duplicate.
    pub fn check_conflicts(
        slot: &Slot<'_>,
        existing: &[Booking],
        editing: Option<i32>,
    ) -> Result<(), RuleViolation> {
        let mut duplicate = false;

        for booking in existing {
            if Some(booking.code) == editing || !booking.collides_with(slot) {
                continue;
            }

            if booking.laboratory_code == slot.laboratory_code {
                return Err(RuleViolation::LaboratoryOccupied);
            }

            duplicate |=
                booking.professor_cpf == slot.professor_cpf && booking.class_code == slot.class_code;
        }

        if duplicate {
            Err(RuleViolation::DuplicateProfessorClass)
        } else {
            Ok(())
        }
    }

    /// Whether a reservation in `status` may be canceled
    pub fn check_cancel(&self, status: ReservationStatus) -> Result<(), RuleViolation> {
        match (self.cancel, status) {
            (_, ReservationStatus::Pending) => Ok(()),
            (_, ReservationStatus::Completed) => Err(RuleViolation::CompletedReservation),
            (CancelPolicy::Idempotent, ReservationStatus::Canceled) => Ok(()),
            (CancelPolicy::PendingOnly, ReservationStatus::Canceled) => {
                Err(RuleViolation::NotPending)
            }
        }
    }

    /// Runs every rule for a create (`current` is `None`) or a full update
    /// of `current`
    pub fn evaluate(
        &self,
        slot: &Slot<'_>,
        current: Option<&Booking>,
        hours: Option<&OperatingHours>,
        existing: &[Booking],
        now: NaiveDateTime,
    ) -> Result<(), RuleViolation> {
        Self::check_interval(slot)?;

        if let Some(current) = current {
            Self::check_mutable(current.status)?;
        }

        // Editing other fields of a reservation that is already close must
        // still be possible, so only a moved start is held to the lead time
        if current.is_none_or(|current| current.starts_at != slot.starts_at) {
            self.check_lead_time(slot.starts_at, now)?;
        }

        Self::check_operating_hours(hours, slot.starts_at)?;

        let status = current.map_or(ReservationStatus::Pending, |current| current.status);
        if status == ReservationStatus::Pending {
            Self::check_conflicts(slot, existing, current.map(|current| current.code))?;
        }

        Ok(())
    }
}
