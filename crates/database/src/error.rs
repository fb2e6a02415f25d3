use models::rules::RuleViolation;
use sea_orm::{DbErr, RuntimeErr, sqlx};
use thiserror::Error;

/// SQLSTATE of `RAISE EXCEPTION` in a trigger or function
const RAISE_EXCEPTION: &str = "P0001";
/// SQLSTATE of an exclusion constraint violation
const EXCLUSION_VIOLATION: &str = "23P01";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A business rule rejected the write
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    /// The database itself rejected the write with a readable message
    #[error("{0}")]
    Rejected(String),
    #[error("Reserva não encontrada")]
    NotFound,
    #[error(transparent)]
    Database(DbErr),
}

impl ServiceError {
    /// Whether the error is the caller's fault and its message can be shown
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rule(_) | Self::Rejected(_))
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match sqlstate(&err) {
            Some((code, message)) if code == RAISE_EXCEPTION => {
                Self::Rejected(strip_error_marker(&message))
            }
            Some((code, _)) if code == EXCLUSION_VIOLATION => {
                Self::Rule(RuleViolation::LaboratoryOccupied)
            }
            _ => Self::Database(err),
        }
    }
}

/// SQLSTATE and message of a driver-reported database error
fn sqlstate(err: &DbErr) -> Option<(String, String)> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))) = err
    else {
        return None;
    };

    Some((db_err.code()?.into_owned(), db_err.message().to_string()))
}

/// Drops the first `ERROR:` marker some drivers prepend to raised messages
pub fn strip_error_marker(message: &str) -> String {
    message.replacen("ERROR:", "", 1).trim().to_string()
}
