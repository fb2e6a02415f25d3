use models::{
    records::{Laboratory, ReservationDetails},
    status::ReservationStatus,
};

fn matches(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(term))
}

/// Laboratories whose name, specialty or code contain `search`, ignoring case
pub fn filter_laboratories<'a>(labs: &'a [Laboratory], search: &str) -> Vec<&'a Laboratory> {
    let term = search.trim().to_lowercase();

    labs.iter()
        .filter(|lab| {
            term.is_empty()
                || matches(Some(&lab.name), &term)
                || matches(Some(&lab.specialty), &term)
                || lab.code.to_string().contains(&term)
        })
        .collect()
}

/// Status and free-text filter of the reservations screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub search: String,
}

impl ReservationFilter {
    /// Matching reservations, newest code first
    pub fn apply<'a>(&self, reservations: &'a [ReservationDetails]) -> Vec<&'a ReservationDetails> {
        let term = self.search.trim().to_lowercase();

        let mut filtered: Vec<_> = reservations
            .iter()
            .filter(|r| self.status.is_none_or(|status| r.reservation.status == status))
            .filter(|r| {
                term.is_empty()
                    || matches(r.laboratory_name.as_deref(), &term)
                    || matches(r.professor_name.as_deref(), &term)
                    || matches(r.discipline_name.as_deref(), &term)
                    || matches(r.class_name.as_deref(), &term)
            })
            .collect();

        filtered.sort_by(|a, b| b.reservation.code.cmp(&a.reservation.code));
        filtered
    }
}
