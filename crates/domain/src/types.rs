// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, PrimitiveDateTime, Time};

/// A wall-clock time with minute precision.
///
/// This is the canonical form every time input is normalized to.
/// Seconds are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ClockParts", into = "ClockParts")]
pub struct TimeOfDay(Time);

/// Wire shape of a `TimeOfDay`.
#[derive(Serialize, Deserialize)]
struct ClockParts {
    hour: u8,
    minute: u8,
}

impl TryFrom<ClockParts> for TimeOfDay {
    type Error = DomainError;

    fn try_from(parts: ClockParts) -> Result<Self, Self::Error> {
        Self::new(parts.hour, parts.minute)
    }
}

impl From<TimeOfDay> for ClockParts {
    fn from(time: TimeOfDay) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl TimeOfDay {
    /// Creates a time of day from a 24-hour clock hour and a minute.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeOfDay` if the hour is not in
    /// `0..=23` or the minute is not in `0..=59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        Time::from_hms(hour, minute, 0)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimeOfDay { hour, minute })
    }

    /// Wraps a `time::Time` literal. Callers guarantee zero seconds.
    pub(crate) const fn from_time(time: Time) -> Self {
        Self(time)
    }

    /// The hour on a 24-hour clock.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.0.hour()
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.0.minute()
    }

    /// The underlying `time::Time`.
    #[must_use]
    pub const fn as_time(&self) -> Time {
        self.0
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub fn minutes_since_midnight(&self) -> i32 {
        i32::from(self.hour()) * 60 + i32::from(self.minute())
    }
}

/// A time field as it arrives from the form.
///
/// The form offers either a time picker or a free-text box, so the same
/// field may be empty, already structured, or a string still to be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RawTimeInput {
    /// Nothing was entered.
    #[default]
    Absent,
    /// A value chosen from a time picker.
    Structured(TimeOfDay),
    /// Free text in the `H:MM AM/PM` pattern.
    Text(String),
}

impl RawTimeInput {
    /// Returns true when nothing usable was entered.
    ///
    /// Blank text counts as absent: an untouched text box submits `""`.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Structured(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// The value as the user entered it, for re-rendering the form.
    #[must_use]
    pub fn original_value(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Structured(time) => time.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// The raw form as collected by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionForm {
    /// Date the registration was submitted.
    pub submitted_date: Option<Date>,
    /// Time the registration was submitted.
    pub submitted_time: RawTimeInput,
    /// Date of the event.
    pub event_date: Option<Date>,
    /// Time the event starts.
    pub event_start_time: RawTimeInput,
    /// Time the event ends. Absence is allowed.
    pub event_end_time: RawTimeInput,
    /// Number of business days in the window that are holidays.
    pub holiday_count: i64,
}

/// A form that passed validation, with every time normalized.
///
/// Only the validator constructs this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSubmission {
    submitted_date: Date,
    submitted_time: TimeOfDay,
    event_date: Date,
    event_start_time: TimeOfDay,
    event_end_time: Option<TimeOfDay>,
    holidays: u32,
}

impl ValidatedSubmission {
    pub(crate) const fn new(
        submitted_date: Date,
        submitted_time: TimeOfDay,
        event_date: Date,
        event_start_time: TimeOfDay,
        event_end_time: Option<TimeOfDay>,
        holidays: u32,
    ) -> Self {
        Self {
            submitted_date,
            submitted_time,
            event_date,
            event_start_time,
            event_end_time,
            holidays,
        }
    }

    #[must_use]
    pub const fn submitted_date(&self) -> Date {
        self.submitted_date
    }

    #[must_use]
    pub const fn submitted_time(&self) -> TimeOfDay {
        self.submitted_time
    }

    #[must_use]
    pub const fn event_date(&self) -> Date {
        self.event_date
    }

    #[must_use]
    pub const fn event_start_time(&self) -> TimeOfDay {
        self.event_start_time
    }

    #[must_use]
    pub const fn event_end_time(&self) -> Option<TimeOfDay> {
        self.event_end_time
    }

    /// Number of holidays to exclude from the business-day count.
    #[must_use]
    pub const fn holidays(&self) -> u32 {
        self.holidays
    }

    /// The submission moment as a naive local datetime.
    #[must_use]
    pub const fn submitted_at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.submitted_date, self.submitted_time.as_time())
    }
}

/// The latest moment a registration could have been submitted on time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestSubmission {
    /// The latest qualifying calendar date.
    pub date: Date,
    /// The latest time on that date.
    pub time: TimeOfDay,
}

impl LatestSubmission {
    #[must_use]
    pub const fn datetime(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.time.as_time())
    }
}

/// How much earlier a late registration should have been submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlierBy {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl EarlierBy {
    /// Splits a duration into whole days, hours and minutes.
    #[must_use]
    pub const fn from_duration(duration: Duration) -> Self {
        let total_minutes: i64 = duration.whole_minutes();
        Self {
            days: total_minutes / (24 * 60),
            hours: (total_minutes % (24 * 60)) / 60,
            minutes: total_minutes % 60,
        }
    }
}

/// Informational notes attached to an evaluation.
///
/// None of these stop an evaluation from producing a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// No on-time submission date exists within the search horizon.
    SearchExhausted {
        /// Number of days searched before the event date.
        horizon_days: u16,
    },
    /// The actual submission is not after the latest allowed moment, yet it
    /// is still late once cutoffs and weekends are applied.
    SubmittedBeforeLatestAllowed,
    /// The event ends before it starts, so the estimated charge is negative.
    NegativeCharge,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SearchExhausted { horizon_days } => write!(
                f,
                "No on-time submission date was found within {horizon_days} days before the event"
            ),
            Self::SubmittedBeforeLatestAllowed => write!(
                f,
                "The submission is not after the latest allowed time, but weekend and cutoff rules still make it late"
            ),
            Self::NegativeCharge => write!(
                f,
                "The event end time is before its start time, so the estimated charge is negative"
            ),
        }
    }
}

/// Outcome of evaluating a validated submission.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// Submission date after the cutoff shift, if any.
    pub effective_submission_date: Date,
    /// Weekdays in `(effective_submission_date, event_date]`.
    pub business_days_between: u32,
    pub holidays_excluded: u32,
    /// `business_days_between` less holidays, floored at zero.
    pub effective_business_days: u32,
    /// Threshold the submission was measured against.
    pub required_business_days: u32,
    pub on_time: bool,
    /// Estimated late fee. Only set for late submissions with an end time.
    pub estimated_charge: Option<f64>,
    /// Only set for late submissions.
    pub latest_allowed_submission: Option<LatestSubmission>,
    /// Only set when the submission is after `latest_allowed_submission`.
    pub earlier_by: Option<EarlierBy>,
    pub notices: Vec<Notice>,
}
