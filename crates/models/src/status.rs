use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumIter;

use crate::rules::RuleViolation;

#[cfg(feature = "database")]
use sea_orm::Value;

/// Lifecycle state of a reservation
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ReservationStatus {
    /// Awaiting use
    #[default]
    #[serde(rename = "PENDENTE")]
    Pending,
    /// Already took place, immutable
    #[serde(rename = "CONCLUIDO")]
    Completed,
    /// Withdrawn before use
    #[serde(rename = "CANCELADO")]
    Canceled,
}

impl ReservationStatus {
    /// The persisted and wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDENTE",
            Self::Completed => "CONCLUIDO",
            Self::Canceled => "CANCELADO",
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDENTE" => Ok(Self::Pending),
            "CONCLUIDO" | "CONCLUÍDO" => Ok(Self::Completed),
            "CANCELADO" => Ok(Self::Canceled),
            _ => Err(RuleViolation::InvalidStatus),
        }
    }
}

impl Display for ReservationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for ReservationStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "ReservationStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::String(sea_orm::sea_query::StringLen::N(16))
    }
}

#[cfg(feature = "database")]
impl From<ReservationStatus> for Value {
    fn from(status: ReservationStatus) -> Self {
        Value::String(Some(Box::new(status.as_str().to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for ReservationStatus {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val = <String as sea_orm::TryGetable>::try_get_by(res, index)?;

        val.parse().map_err(|e: RuleViolation| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!("{e} ({val})")))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for ReservationStatus {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "PENDENTE".parse::<ReservationStatus>(),
            Ok(ReservationStatus::Pending)
        );
        assert_eq!(
            " cancelado ".parse::<ReservationStatus>(),
            Ok(ReservationStatus::Canceled)
        );
        assert_eq!(
            "Concluído".parse::<ReservationStatus>(),
            Ok(ReservationStatus::Completed)
        );
        assert_eq!(
            "ATIVO".parse::<ReservationStatus>(),
            Err(RuleViolation::InvalidStatus)
        );
    }

    #[test]
    fn test_status_round_trips_through_display() {
        for status in ReservationStatus::iter() {
            assert_eq!(status.to_string().parse::<ReservationStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ReservationStatus::Canceled).unwrap();
        assert_eq!(json, "\"CANCELADO\"");

        let parsed: ReservationStatus = serde_json::from_str("\"CONCLUIDO\"").unwrap();
        assert_eq!(parsed, ReservationStatus::Completed);

        assert!(serde_json::from_str::<ReservationStatus>("\"ATIVO\"").is_err());
    }
}
