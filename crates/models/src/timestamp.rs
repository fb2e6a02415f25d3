//! Serde helpers for reservation timestamps.
//!
//! Browsers send `datetime-local` values without seconds, other clients send
//! full ISO timestamps, possibly with an offset. All of them are accepted and
//! stored as naive local time.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de::Error};

/// Output format for every timestamp the API emits
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted input formats, tried in order
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses any accepted timestamp representation
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|moment| moment.with_timezone(&Local).naive_local())
        })
}

pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Same as the parent module, for optional timestamps
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expected() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 22)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_browser_input() {
        assert_eq!(parse("2025-10-22T14:30"), Some(expected()));
    }

    #[test]
    fn test_parse_full_formats() {
        assert_eq!(parse("2025-10-22T14:30:00"), Some(expected()));
        assert_eq!(parse("2025-10-22 14:30:00"), Some(expected()));
        assert_eq!(parse(" 2025-10-22 14:30 "), Some(expected()));
        assert_eq!(
            parse("2025-10-22T14:30:00.250").map(|t| t.and_utc().timestamp_subsec_millis()),
            Some(250)
        );
    }

    #[test]
    fn test_parse_with_offset_is_converted_to_local() {
        let parsed = parse("2025-10-22T14:30:00Z").unwrap();
        let local = DateTime::parse_from_rfc3339("2025-10-22T14:30:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parsed, local);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("22/10/2025 14:30"), None);
        assert_eq!(parse("2025-13-40T10:00"), None);
    }
}
