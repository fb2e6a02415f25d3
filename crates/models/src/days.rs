use chrono::Weekday;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};
use thiserror::Error;

/// A day name in an operating-hours descriptor that could not be recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dia da semana desconhecido: {0}")]
pub struct UnknownDay(pub String);

/// Represents the days of the week a laboratory is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct DaySet(u8);

impl DaySet {
    // Constants for individual days
    pub const MONDAY: Self = DaySet(1 << 0);
    pub const TUESDAY: Self = DaySet(1 << 1);
    pub const WEDNESDAY: Self = DaySet(1 << 2);
    pub const THURSDAY: Self = DaySet(1 << 3);
    pub const FRIDAY: Self = DaySet(1 << 4);
    pub const SATURDAY: Self = DaySet(1 << 5);
    pub const SUNDAY: Self = DaySet(1 << 6);

    // Constants for common day combinations
    pub const WEEKDAYS: Self = DaySet(0b0011111);
    pub const WEEKEND: Self = DaySet(0b1100000);
    pub const ALL: Self = DaySet(0b1111111);
    pub const NONE: Self = DaySet(0);

    /// Day-to-abbreviation mapping for parsing and display, Monday first
    const DAY_NAMES: [(Self, &'static str); 7] = [
        (Self::MONDAY, "Seg"),
        (Self::TUESDAY, "Ter"),
        (Self::WEDNESDAY, "Qua"),
        (Self::THURSDAY, "Qui"),
        (Self::FRIDAY, "Sex"),
        (Self::SATURDAY, "Sáb"),
        (Self::SUNDAY, "Dom"),
    ];

    /// Full names, unaccented, in the same order as `DAY_NAMES`
    const FULL_NAMES: [&'static str; 7] = [
        "segunda", "terca", "quarta", "quinta", "sexta", "sabado", "domingo",
    ];

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn contains(self, day: Self) -> bool {
        (self & day) == day
    }

    pub fn add(&mut self, day: Self) {
        *self |= day;
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Parses a single abbreviated or full Portuguese day name. The whole
    /// token must match.
    fn parse_day(token: &str) -> Result<Self, UnknownDay> {
        let normalized = unaccent(token.trim());

        Self::DAY_NAMES
            .iter()
            .zip(Self::FULL_NAMES)
            .find(|((_, short), full)| unaccent(short) == normalized || *full == normalized)
            .map(|((day, _), _)| *day)
            .ok_or_else(|| UnknownDay(token.trim().to_string()))
    }

    /// Position of a single day in the Monday-first week
    fn position(day: Self) -> usize {
        day.0.trailing_zeros() as usize
    }
}

fn unaccent(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

impl From<Weekday> for DaySet {
    fn from(weekday: Weekday) -> Self {
        DaySet(1 << weekday.num_days_from_monday())
    }
}

impl FromStr for DaySet {
    type Err = UnknownDay;

    /// Accepts comma separated days and inclusive ranges, e.g. `Seg-Sex`,
    /// `Seg,Qua,Sex` or `Sex-Seg` (wrapping through the weekend)
    fn from_str(days: &str) -> Result<Self, Self::Err> {
        let mut result = Self::new();

        for item in days.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match item.split_once('-') {
                Some((first, last)) => {
                    let first = Self::position(Self::parse_day(first)?);
                    let last = Self::position(Self::parse_day(last)?);
                    let span = (last + 7 - first) % 7;

                    for offset in 0..=span {
                        result.add(Self::DAY_NAMES[(first + offset) % 7].0);
                    }
                }
                None => result.add(Self::parse_day(item)?),
            }
        }

        if result.is_empty() {
            return Err(UnknownDay(days.trim().to_string()));
        }

        Ok(result)
    }
}

impl Display for DaySet {
    /// Runs of three or more consecutive days collapse into a range
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut parts = Vec::new();
        let mut index = 0;

        while index < 7 {
            if !self.contains(Self::DAY_NAMES[index].0) {
                index += 1;
                continue;
            }

            let start = index;
            while index + 1 < 7 && self.contains(Self::DAY_NAMES[index + 1].0) {
                index += 1;
            }

            match index - start {
                0 => parts.push(Self::DAY_NAMES[start].1.to_string()),
                1 => {
                    parts.push(Self::DAY_NAMES[start].1.to_string());
                    parts.push(Self::DAY_NAMES[index].1.to_string());
                }
                _ => parts.push(format!(
                    "{}-{}",
                    Self::DAY_NAMES[start].1,
                    Self::DAY_NAMES[index].1
                )),
            }
            index += 1;
        }

        write!(f, "{}", parts.join(","))
    }
}

// Bitwise operators
impl BitOr for DaySet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        DaySet(self.0 | rhs.0)
    }
}

impl BitAnd for DaySet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        DaySet(self.0 & rhs.0)
    }
}

impl BitOrAssign for DaySet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod test {
    use crate::days::{DaySet, UnknownDay};
    use chrono::Weekday;
    use std::str::FromStr;

    #[test]
    fn test_day_set_from_range() {
        let days = DaySet::from_str("Seg-Sex").unwrap();
        assert_eq!(days, DaySet::WEEKDAYS);
        assert!(!days.contains(DaySet::SATURDAY));
        assert!(!days.contains(DaySet::SUNDAY));
    }

    #[test]
    fn test_day_set_from_list() {
        let days = DaySet::from_str("seg, QUA ,sexta").unwrap();
        assert!(days.contains(DaySet::MONDAY));
        assert!(!days.contains(DaySet::TUESDAY));
        assert!(days.contains(DaySet::WEDNESDAY));
        assert!(!days.contains(DaySet::THURSDAY));
        assert!(days.contains(DaySet::FRIDAY));
    }

    #[test]
    fn test_day_set_wrapping_range() {
        let days = DaySet::from_str("Sex-Seg").unwrap();
        assert_eq!(
            days,
            DaySet::FRIDAY | DaySet::SATURDAY | DaySet::SUNDAY | DaySet::MONDAY
        );
    }

    #[test]
    fn test_day_set_accents() {
        assert_eq!(DaySet::from_str("Sáb").unwrap(), DaySet::SATURDAY);
        assert_eq!(DaySet::from_str("sab").unwrap(), DaySet::SATURDAY);
        assert_eq!(DaySet::from_str("Sáb-Dom").unwrap(), DaySet::WEEKEND);
    }

    #[test]
    fn test_day_set_unknown() {
        assert_eq!(
            DaySet::from_str("Seg-Xyz"),
            Err(UnknownDay("Xyz".to_string()))
        );
        assert!(DaySet::from_str("").is_err());
    }

    #[test]
    fn test_day_set_requires_whole_name() {
        assert_eq!(DaySet::from_str("Segxyz"), Err(UnknownDay("Segxyz".to_string())));
        assert_eq!(
            DaySet::from_str("SegaSex"),
            Err(UnknownDay("SegaSex".to_string()))
        );
        assert!(DaySet::from_str("Sa").is_err());
    }

    #[test]
    fn test_day_set_full_names() {
        assert_eq!(DaySet::from_str("Segunda-Sexta").unwrap(), DaySet::WEEKDAYS);
        assert_eq!(DaySet::from_str("terça").unwrap(), DaySet::TUESDAY);
        assert_eq!(DaySet::from_str("Sábado,domingo").unwrap(), DaySet::WEEKEND);
    }

    #[test]
    fn test_day_set_display() {
        assert_eq!(DaySet::WEEKDAYS.to_string(), "Seg-Sex");
        assert_eq!(DaySet::ALL.to_string(), "Seg-Dom");
        assert_eq!(DaySet::WEEKEND.to_string(), "Sáb,Dom");

        let mut days = DaySet::new();
        days.add(DaySet::MONDAY);
        days.add(DaySet::WEDNESDAY);
        days.add(DaySet::FRIDAY);
        assert_eq!(days.to_string(), "Seg,Qua,Sex");
    }

    #[test]
    fn test_day_set_from_weekday() {
        assert_eq!(DaySet::from(Weekday::Mon), DaySet::MONDAY);
        assert_eq!(DaySet::from(Weekday::Sun), DaySet::SUNDAY);
        assert!(DaySet::WEEKDAYS.contains(Weekday::Thu.into()));
        assert!(!DaySet::WEEKDAYS.contains(Weekday::Sat.into()));
    }
}
