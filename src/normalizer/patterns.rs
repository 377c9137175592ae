//! Ordered table of time-expression matchers.
//!
//! Explicit 24-hour notations come first so they are never reinterpreted as
//! 12-hour phrases, and the period-qualified phrase precedes the bare phrase
//! because the latter is a prefix of the former.

use super::time_converter::{convert_explicit, convert_natural, ConversionError};
use super::time_types::{CanonicalTime, Period, Qualifier};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

type Converter = fn(&Captures) -> Result<CanonicalTime, ConversionError>;

/// One entry of the dispatch table: a matcher and the converter applied to
/// each of its matches.
pub struct TimePattern {
    pub name: &'static str,
    pub regex: Regex,
    convert: Converter,
}

impl TimePattern {
    fn new(name: &'static str, pattern: &str, convert: Converter) -> Self {
        let regex = Regex::new(pattern).expect("time pattern must be a valid regex");
        Self { name, regex, convert }
    }

    pub fn convert(&self, caps: &Captures) -> Result<CanonicalTime, ConversionError> {
        (self.convert)(caps)
    }
}

fn group<'h>(caps: &Captures<'h>, index: usize) -> Option<&'h str> {
    caps.get(index).map(|m| m.as_str())
}

fn hour_and_minute(caps: &Captures) -> Result<CanonicalTime, ConversionError> {
    convert_explicit(group(caps, 1).unwrap_or_default(), group(caps, 2))
}

fn hour_only(caps: &Captures) -> Result<CanonicalTime, ConversionError> {
    convert_explicit(group(caps, 1).unwrap_or_default(), None)
}

fn natural_phrase(caps: &Captures) -> Result<CanonicalTime, ConversionError> {
    convert_natural(
        group(caps, 1).unwrap_or_default(),
        Qualifier::from_phrase(group(caps, 2)),
        Period::from_phrase(group(caps, 3)),
    )
}

/// The process-wide pattern table, in priority order
pub static TIME_PATTERNS: Lazy<Vec<TimePattern>> = Lazy::new(|| {
    vec![
        TimePattern::new("hour-minute", r"\b(\d{1,2})h(\d{1,2})m\b", hour_and_minute),
        TimePattern::new("hour", r"\b(\d{1,2})h\b", hour_only),
        TimePattern::new("colon", r"\b(\d{1,2}):(\d{2})\b", hour_and_minute),
        TimePattern::new("en-punto", r"\b(\d{1,2}) en punto\b", hour_only),
        TimePattern::new(
            "period-phrase",
            r"\b(\d{1,2})(?: (y cuarto|y media|menos cuarto))? (de la mañana|del mediodía|de la tarde|de la noche|de la madrugada)\b",
            natural_phrase,
        ),
        TimePattern::new("bare-phrase", r"\b(\d{1,2}) (y cuarto|y media|menos cuarto)\b", natural_phrase),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> &'static TimePattern {
        TIME_PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn test_table_order() {
        let names: Vec<&str> = TIME_PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["hour-minute", "hour", "colon", "en-punto", "period-phrase", "bare-phrase"]
        );
    }

    #[test]
    fn test_period_phrase_captures_qualifier_and_period() {
        let p = pattern("period-phrase");
        let caps = p.regex.captures("a las 5 menos cuarto de la tarde").unwrap();
        assert_eq!(group(&caps, 1), Some("5"));
        assert_eq!(group(&caps, 2), Some("menos cuarto"));
        assert_eq!(group(&caps, 3), Some("de la tarde"));
        assert_eq!(p.convert(&caps).unwrap().to_string(), "16:45");
    }

    #[test]
    fn test_period_phrase_without_qualifier() {
        let p = pattern("period-phrase");
        let caps = p.regex.captures("a las 3 de la tarde").unwrap();
        assert_eq!(group(&caps, 2), None);
        assert_eq!(p.convert(&caps).unwrap().to_string(), "15:00");
    }

    #[test]
    fn test_hour_pattern_needs_word_boundary() {
        let p = pattern("hour");
        assert!(p.regex.find("5h30m").is_none());
        assert!(p.regex.find("17h").is_some());
        assert!(p.regex.find("17horas").is_none());
    }

    #[test]
    fn test_bare_phrase_requires_qualifier() {
        let p = pattern("bare-phrase");
        assert!(p.regex.find("llegan 5 personas").is_none());
        assert!(p.regex.find("a las 5 y media").is_some());
    }
}
