use chrono::{Datelike, NaiveDateTime, NaiveTime};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use thiserror::Error;

use crate::days::{DaySet, UnknownDay};

/// Why an operating-hours descriptor could not be understood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoursParseError {
    #[error("descritor de horário vazio")]
    Empty,
    #[error(transparent)]
    UnknownDay(#[from] UnknownDay),
    #[error("horário inválido: {0}")]
    InvalidTime(String),
    #[error("faixa de horário sem separador: {0}")]
    MissingSeparator(String),
    #[error("o horário de abertura deve ser anterior ao de fechamento")]
    EmptyWindow,
}

/// Closing time used for `24:00`
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN)
}

/// A half-open daily window `[begin, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub begin: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Creates a new `TimeRange` if `begin` is before `end`
    pub fn new(begin: NaiveTime, end: NaiveTime) -> Option<Self> {
        (begin < end).then_some(Self { begin, end })
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.begin <= time && time < self.end
    }
}

/// When a laboratory accepts reservations to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    pub days: DaySet,
    pub window: TimeRange,
}

impl OperatingHours {
    /// Whether a reservation starting at `start` begins while the lab is open
    pub fn admits(&self, start: NaiveDateTime) -> bool {
        self.days.contains(start.weekday().into()) && self.window.contains(start.time())
    }
}

/// Parses `07:00`, `7h`, `7h30`, `07` and `24:00`
fn parse_clock(raw: &str) -> Result<NaiveTime, HoursParseError> {
    let invalid = || HoursParseError::InvalidTime(raw.to_string());
    let clock = raw.trim().to_lowercase();

    if matches!(clock.as_str(), "24:00" | "24h" | "24h00" | "24") {
        return Ok(end_of_day());
    }

    let (hour, minute) = match clock.split_once([':', 'h']) {
        Some((hour, "")) => (hour, "0"),
        Some((hour, minute)) => (hour, minute),
        None => (clock.as_str(), "0"),
    };

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

impl FromStr for OperatingHours {
    type Err = HoursParseError;

    /// Parses descriptors such as `07:00-22:00`, `Seg-Sex 08:00 - 18:00` or
    /// `Seg,Qua: 7h às 12h`. Without a day prefix the lab is open every day.
    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let descriptor = descriptor.trim();
        if descriptor.is_empty() {
            return Err(HoursParseError::Empty);
        }

        // Days come before the first digit, times after it
        let split = descriptor
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| HoursParseError::InvalidTime(descriptor.to_string()))?;
        let (days, times) = descriptor.split_at(split);

        // "Seg a Sex" is a range, same as "Seg-Sex"
        let days: String = days
            .split_whitespace()
            .map(|word| match word {
                "a" | "A" | "à" | "À" => "-",
                word => word,
            })
            .collect::<String>()
            .trim_end_matches([':', ','])
            .to_string();
        let days = if days.is_empty() {
            DaySet::ALL
        } else {
            days.parse()?
        };

        let times = times.replace("às", "-").replace(" as ", "-").replace(" a ", "-");
        let (begin, end) = times
            .split_once('-')
            .ok_or_else(|| HoursParseError::MissingSeparator(times.trim().to_string()))?;

        let window = TimeRange::new(parse_clock(begin)?, parse_clock(end)?)
            .ok_or(HoursParseError::EmptyWindow)?;

        Ok(Self { days, window })
    }
}

impl Display for OperatingHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.days != DaySet::ALL {
            write!(f, "{} ", self.days)?;
        }

        let end = if self.window.end == end_of_day() {
            "24:00".to_string()
        } else {
            self.window.end.format("%H:%M").to_string()
        };

        write!(f, "{}-{}", self.window.begin.format("%H:%M"), end)
    }
}
