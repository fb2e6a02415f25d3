use models::{records::ReservationDetails, status::ReservationStatus};

use crate::store::Snapshot;

/// How many upcoming reservations the dashboard shows
pub const UPCOMING_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub laboratories: usize,
    pub professors: usize,
    pub pending: usize,
    pub completed: usize,
    pub canceled: usize,
}

impl DashboardStats {
    pub fn from_snapshot(data: &Snapshot) -> Self {
        let with_status = |status| {
            data.reservations
                .iter()
                .filter(|r| r.reservation.status == status)
                .count()
        };

        Self {
            laboratories: data.laboratories.len(),
            professors: data.professors.len(),
            pending: with_status(ReservationStatus::Pending),
            completed: with_status(ReservationStatus::Completed),
            canceled: with_status(ReservationStatus::Canceled),
        }
    }
}

/// Pending reservations, soonest first, at most [`UPCOMING_LIMIT`]
pub fn upcoming(reservations: &[ReservationDetails]) -> Vec<&ReservationDetails> {
    let mut pending: Vec<_> = reservations
        .iter()
        .filter(|r| r.reservation.status == ReservationStatus::Pending)
        .collect();
    pending.sort_by_key(|r| r.reservation.starts_at);
    pending.truncate(UPCOMING_LIMIT);
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::details;
    use models::records::Laboratory;

    #[test]
    fn test_stats() {
        let data = Snapshot {
            reservations: vec![
                details(1, 20, ReservationStatus::Pending),
                details(2, 21, ReservationStatus::Pending),
                details(3, 22, ReservationStatus::Completed),
                details(4, 23, ReservationStatus::Canceled),
            ],
            laboratories: vec![Laboratory {
                code: 1,
                name: "Química".to_string(),
                specialty: "Geral".to_string(),
                opening_hours: None,
            }],
            ..Snapshot::default()
        };

        assert_eq!(
            DashboardStats::from_snapshot(&data),
            DashboardStats {
                laboratories: 1,
                professors: 0,
                pending: 2,
                completed: 1,
                canceled: 1,
            }
        );
    }

    #[test]
    fn test_upcoming_is_sorted_and_limited() {
        let mut reservations: Vec<_> = (1..=10)
            .rev()
            .map(|code| details(code, 10 + code as u32, ReservationStatus::Pending))
            .collect();
        reservations.push(details(11, 1, ReservationStatus::Canceled));

        let codes: Vec<_> = upcoming(&reservations)
            .iter()
            .map(|r| r.reservation.code)
            .collect();
        assert_eq!(codes, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
