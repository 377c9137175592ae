//! Value types shared by the pattern table and the time converter.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Part of the day that disambiguates a 12-hour reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Morning,
    Midday,
    Afternoon,
    Night,
    Dawn,
    None,
}

impl Period {
    /// Map the captured period phrase (e.g. "de la tarde") to a period.
    /// Absent or unknown phrases yield `Period::None`.
    pub fn from_phrase(phrase: Option<&str>) -> Self {
        match phrase.map(str::trim) {
            Some("de la mañana") => Period::Morning,
            Some("del mediodía") => Period::Midday,
            Some("de la tarde") => Period::Afternoon,
            Some("de la noche") => Period::Night,
            Some("de la madrugada") => Period::Dawn,
            _ => Period::None,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Period::Morning => "de la mañana",
            Period::Midday => "del mediodía",
            Period::Afternoon => "de la tarde",
            Period::Night => "de la noche",
            Period::Dawn => "de la madrugada",
            Period::None => "",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::None => write!(f, "none"),
            other => write!(f, "{}", other.phrase()),
        }
    }
}

/// Sub-hour offset attached to a natural hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    QuarterPast,
    HalfPast,
    QuarterTo,
    None,
}

impl Qualifier {
    pub fn from_phrase(phrase: Option<&str>) -> Self {
        match phrase.map(str::trim) {
            Some("y cuarto") => Qualifier::QuarterPast,
            Some("y media") => Qualifier::HalfPast,
            Some("menos cuarto") => Qualifier::QuarterTo,
            _ => Qualifier::None,
        }
    }

    /// Minutes contributed by the qualifier
    pub fn minute(&self) -> u32 {
        match self {
            Qualifier::QuarterPast => 15,
            Qualifier::HalfPast => 30,
            Qualifier::QuarterTo => 45,
            Qualifier::None => 0,
        }
    }
}

/// A validated 24-hour time of day, rendered as `HH:MM`.
///
/// Construction goes through [`CanonicalTime::new`], so hour and minute are
/// always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalTime(NaiveTime);

impl CanonicalTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(CanonicalTime)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for CanonicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}
