//! Conversion of captured hour/minute text into canonical 24-hour times.
//!
//! Two families of input are handled:
//!
//! * explicit 24-hour notations (`17h`, `5h30m`, `9:05`, `8 en punto`), where
//!   the digits pass through once they are in range;
//! * natural 12-hour phrases (`5 y cuarto`, `3 de la tarde`), where the hour is
//!   adjusted by the qualifier and then mapped through the period table.
//!
//! Every failure is reported as a [`ConversionError`]; nothing is clamped.

use super::time_types::{CanonicalTime, Period, Qualifier};
use thiserror::Error;

/// Reason a matched expression could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("hour {hour} is outside {min}..={max}")]
    HourOutOfRange { hour: u32, min: u32, max: u32 },
    #[error("minute {0} is outside 0..=59")]
    MinuteOutOfRange(u32),
    #[error("hour {hour} is not valid {period}")]
    PeriodMismatch { hour: u32, period: Period },
}

fn parse_digits(digits: &str) -> Result<u32, ConversionError> {
    digits
        .trim()
        .parse::<u32>()
        .map_err(|_| ConversionError::NotANumber(digits.to_string()))
}

/// Convert an explicit 24-hour reading. `minute` is `None` for forms such as
/// `17h` or `8 en punto`.
pub fn convert_explicit(hour: &str, minute: Option<&str>) -> Result<CanonicalTime, ConversionError> {
    let hour = parse_digits(hour)?;
    let minute = minute.map(parse_digits).transpose()?.unwrap_or(0);

    if hour > 23 {
        return Err(ConversionError::HourOutOfRange { hour, min: 0, max: 23 });
    }
    if minute > 59 {
        return Err(ConversionError::MinuteOutOfRange(minute));
    }

    CanonicalTime::new(hour, minute).ok_or(ConversionError::HourOutOfRange { hour, min: 0, max: 23 })
}

/// Convert a natural 12-hour phrase such as `5 menos cuarto de la tarde`.
pub fn convert_natural(
    hour: &str,
    qualifier: Qualifier,
    period: Period,
) -> Result<CanonicalTime, ConversionError> {
    let captured = parse_digits(hour)?;
    if !(1..=12).contains(&captured) {
        return Err(ConversionError::HourOutOfRange { hour: captured, min: 1, max: 12 });
    }

    // "menos cuarto" reads as 45 minutes into the previous hour
    let hour = match qualifier {
        Qualifier::QuarterTo if captured == 1 => 12,
        Qualifier::QuarterTo => captured - 1,
        _ => captured,
    };

    let hour_24 = map_period(hour, period)?;
    CanonicalTime::new(hour_24, qualifier.minute())
        .ok_or(ConversionError::HourOutOfRange { hour: hour_24, min: 0, max: 23 })
}

/// Map a 12-hour value in 1..=12 to a 24-hour value according to the period
fn map_period(hour: u32, period: Period) -> Result<u32, ConversionError> {
    let mismatch = || ConversionError::PeriodMismatch { hour, period };

    match (period, hour) {
        (Period::None, h) => Ok(h % 12),
        (Period::Morning, 12) => Ok(0),
        (Period::Morning, h) => Ok(h),
        (Period::Midday, 12) => Ok(12),
        (Period::Midday, h) => Ok(h + 12),
        (Period::Afternoon, h @ 1..=7) => Ok(h + 12),
        (Period::Afternoon, _) => Err(mismatch()),
        (Period::Night, h @ 8..=11) => Ok(h % 12),
        (Period::Night, 12) => Ok(0),
        (Period::Night, h @ 1..=4) => Ok(h),
        (Period::Night, _) => Err(mismatch()),
        (Period::Dawn, h @ 1..=6) => Ok(h),
        (Period::Dawn, _) => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural(hour: &str, qualifier: Qualifier, period: Period) -> Option<String> {
        convert_natural(hour, qualifier, period).ok().map(|t| t.to_string())
    }

    #[test]
    fn test_explicit_in_range() {
        assert_eq!(convert_explicit("5", Some("30")).unwrap().to_string(), "05:30");
        assert_eq!(convert_explicit("0", None).unwrap().to_string(), "00:00");
        assert_eq!(convert_explicit("23", Some("59")).unwrap().to_string(), "23:59");
    }

    #[test]
    fn test_explicit_out_of_range() {
        assert_eq!(
            convert_explicit("25", Some("10")),
            Err(ConversionError::HourOutOfRange { hour: 25, min: 0, max: 23 })
        );
        assert_eq!(convert_explicit("12", Some("75")), Err(ConversionError::MinuteOutOfRange(75)));
    }

    #[test]
    fn test_natural_without_period() {
        assert_eq!(natural("5", Qualifier::QuarterPast, Period::None).as_deref(), Some("05:15"));
        assert_eq!(natural("12", Qualifier::HalfPast, Period::None).as_deref(), Some("00:30"));
        assert_eq!(natural("1", Qualifier::QuarterTo, Period::None).as_deref(), Some("00:45"));
    }

    #[test]
    fn test_natural_hour_bounds_checked_before_decrement() {
        assert!(natural("0", Qualifier::QuarterTo, Period::None).is_none());
        assert!(natural("13", Qualifier::QuarterTo, Period::None).is_none());
        assert!(natural("0", Qualifier::None, Period::Morning).is_none());
    }

    #[test]
    fn test_morning_and_midday() {
        assert_eq!(natural("12", Qualifier::None, Period::Morning).as_deref(), Some("00:00"));
        assert_eq!(natural("9", Qualifier::None, Period::Morning).as_deref(), Some("09:00"));
        assert_eq!(natural("12", Qualifier::None, Period::Midday).as_deref(), Some("12:00"));
        assert_eq!(natural("1", Qualifier::HalfPast, Period::Midday).as_deref(), Some("13:30"));
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(natural("3", Qualifier::None, Period::Afternoon).as_deref(), Some("15:00"));
        assert_eq!(natural("7", Qualifier::None, Period::Afternoon).as_deref(), Some("19:00"));
        assert_eq!(
            convert_natural("9", Qualifier::None, Period::Afternoon),
            Err(ConversionError::PeriodMismatch { hour: 9, period: Period::Afternoon })
        );
        // quarter-to moves 1 back to 12, which the afternoon does not accept
        assert!(natural("1", Qualifier::QuarterTo, Period::Afternoon).is_none());
    }

    #[test]
    fn test_night_and_dawn() {
        assert_eq!(natural("10", Qualifier::None, Period::Night).as_deref(), Some("10:00"));
        assert_eq!(natural("12", Qualifier::None, Period::Night).as_deref(), Some("00:00"));
        assert_eq!(natural("2", Qualifier::None, Period::Night).as_deref(), Some("02:00"));
        assert!(natural("6", Qualifier::None, Period::Night).is_none());
        assert_eq!(natural("4", Qualifier::QuarterPast, Period::Dawn).as_deref(), Some("04:15"));
        assert!(natural("7", Qualifier::None, Period::Dawn).is_none());
    }
}
