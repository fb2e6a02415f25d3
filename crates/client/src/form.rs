use crate::{
    api::{ApiClient, ApiError},
    format::input_value,
    messages::localize_error,
};
use models::{
    records::{Laboratory, Reservation, ReservationDetails, ReservationInput},
    timestamp,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Preencha todos os campos obrigatórios.")]
    MissingFields,
    #[error("Data/hora inválida.")]
    InvalidTimestamp,
    #[error("A data de término deve ser posterior à data de início.")]
    EndNotAfterStart,
    /// The server refused the reservation; holds the text to show
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

/// Raw form values, as typed. Codes are `0` until chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub starts_at: String,
    pub ends_at: String,
    pub professor_cpf: String,
    pub discipline_code: i32,
    pub class_code: i32,
    pub laboratory_code: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub mode: FormMode,
    pub fields: FormFields,
}

impl ReservationForm {
    /// Empty form, with the laboratory preselected only if it exists
    pub fn create(laboratory: Option<i32>, laboratories: &[Laboratory]) -> Self {
        let laboratory_code = laboratory
            .filter(|code| laboratories.iter().any(|lab| lab.code == *code))
            .unwrap_or_default();

        Self {
            mode: FormMode::Create,
            fields: FormFields {
                laboratory_code,
                ..FormFields::default()
            },
        }
    }

    /// Form loaded with reservation `code`, if it is known
    pub fn edit(code: i32, reservations: &[ReservationDetails]) -> Option<Self> {
        let reservation = &reservations
            .iter()
            .find(|r| r.reservation.code == code)?
            .reservation;

        Some(Self {
            mode: FormMode::Edit(code),
            fields: FormFields {
                starts_at: input_value(reservation.starts_at),
                ends_at: input_value(reservation.ends_at),
                professor_cpf: reservation.professor_cpf.clone(),
                discipline_code: reservation.discipline_code,
                class_code: reservation.class_code,
                laboratory_code: reservation.laboratory_code,
            },
        })
    }

    /// Checks done before anything is sent
    pub fn validate(&self) -> Result<ReservationInput, FormError> {
        let fields = &self.fields;
        if fields.laboratory_code == 0
            || fields.professor_cpf.trim().is_empty()
            || fields.discipline_code == 0
            || fields.class_code == 0
            || fields.starts_at.trim().is_empty()
            || fields.ends_at.trim().is_empty()
        {
            return Err(FormError::MissingFields);
        }

        let starts_at = timestamp::parse(&fields.starts_at).ok_or(FormError::InvalidTimestamp)?;
        let ends_at = timestamp::parse(&fields.ends_at).ok_or(FormError::InvalidTimestamp)?;
        if ends_at <= starts_at {
            return Err(FormError::EndNotAfterStart);
        }

        Ok(ReservationInput {
            starts_at,
            ends_at,
            professor_cpf: fields.professor_cpf.trim().to_string(),
            discipline_code: fields.discipline_code,
            class_code: fields.class_code,
            laboratory_code: fields.laboratory_code,
        })
    }

    /// Validates, then creates or updates. On success returns the saved row
    /// and the message to show.
    pub async fn submit(&self, api: &ApiClient) -> Result<(Reservation, &'static str), FormError> {
        let input = self.validate()?;

        let result = match self.mode {
            FormMode::Create => api
                .create_reservation(&input)
                .await
                .map(|saved| (saved, "Reserva criada com sucesso!")),
            FormMode::Edit(code) => api
                .update_reservation(code, &input)
                .await
                .map(|saved| (saved, "Reserva atualizada com sucesso!")),
        };

        result.map_err(|err| match err {
            ApiError::Status { message, .. } => FormError::Rejected(localize_error(&message)),
            ApiError::Transport(err) => FormError::Rejected(err.to_string()),
        })
    }
}
