// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Normalization of form time inputs.
//!
//! Every time field is reduced to a `TimeOfDay` before any rule runs.
//! Free text must follow the 12-hour `H:MM AM/PM` pattern; the meridiem
//! is case-insensitive and the minute must be two digits.

use crate::types::{RawTimeInput, TimeOfDay};
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The single accepted text pattern, e.g. `3:00 pm` or `11:45 AM`.
const TWELVE_HOUR_CLOCK: &[BorrowedFormatItem<'static>] = format_description!(
    "[hour repr:12 padding:none]:[minute] [period case:lower case_sensitive:false]"
);

/// Why a time input could not be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationFailure {
    /// Nothing was entered.
    Missing,
    /// Text was entered but does not match the accepted pattern.
    BadFormat,
}

impl std::fmt::Display for NormalizationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "no time was entered"),
            Self::BadFormat => write!(f, "time does not match H:MM AM/PM"),
        }
    }
}

impl std::error::Error for NormalizationFailure {}

/// Normalizes a raw time input.
///
/// A structured value is returned unchanged. Absent input and blank text
/// are `Missing`; whether that is fatal is the caller's decision.
///
/// # Errors
///
/// Returns `NormalizationFailure::Missing` for absent input and
/// `NormalizationFailure::BadFormat` for text that does not parse.
pub fn normalize(input: &RawTimeInput) -> Result<TimeOfDay, NormalizationFailure> {
    match input {
        RawTimeInput::Absent => Err(NormalizationFailure::Missing),
        RawTimeInput::Structured(time) => Ok(*time),
        RawTimeInput::Text(text) if text.trim().is_empty() => Err(NormalizationFailure::Missing),
        RawTimeInput::Text(text) => parse_time_of_day(text),
    }
}

/// Parses `H:MM AM/PM` text into a `TimeOfDay`.
///
/// # Errors
///
/// Returns `NormalizationFailure::BadFormat` if the text deviates from
/// the pattern in any way.
pub fn parse_time_of_day(text: &str) -> Result<TimeOfDay, NormalizationFailure> {
    Time::parse(text.trim(), TWELVE_HOUR_CLOCK)
        .map(TimeOfDay::from_time)
        .map_err(|_| NormalizationFailure::BadFormat)
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted: String = self
            .as_time()
            .format(TWELVE_HOUR_CLOCK)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_afternoon_time() {
        let time: TimeOfDay = parse_time_of_day("3:00 pm").unwrap();
        assert_eq!((time.hour(), time.minute()), (15, 0));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            parse_time_of_day("9:05 AM").unwrap(),
            parse_time_of_day("9:05 am").unwrap()
        );
        assert_eq!(
            parse_time_of_day("9:05 Pm").unwrap(),
            TimeOfDay::new(21, 5).unwrap()
        );
    }

    #[test]
    fn test_parse_noon_and_midnight() {
        assert_eq!(
            parse_time_of_day("12:00 pm").unwrap(),
            TimeOfDay::new(12, 0).unwrap()
        );
        assert_eq!(
            parse_time_of_day("12:30 am").unwrap(),
            TimeOfDay::new(0, 30).unwrap()
        );
    }

    #[test]
    fn test_parse_accepts_surrounding_whitespace() {
        assert_eq!(
            parse_time_of_day("  2:00 pm ").unwrap(),
            TimeOfDay::new(14, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_deviations() {
        for text in [
            "15:00",
            "3 pm",
            "3:0 pm",
            "13:00 pm",
            "0:30 am",
            "3:60 pm",
            "3:00",
            "3:00 pm extra",
            "three o'clock",
        ] {
            assert_eq!(
                parse_time_of_day(text),
                Err(NormalizationFailure::BadFormat),
                "{text} should not parse"
            );
        }
    }

    #[test]
    fn test_display_uses_the_parse_pattern() {
        assert_eq!(TimeOfDay::new(15, 0).unwrap().to_string(), "3:00 pm");
        assert_eq!(TimeOfDay::new(0, 5).unwrap().to_string(), "12:05 am");
        assert_eq!(TimeOfDay::new(11, 45).unwrap().to_string(), "11:45 am");
    }
}
