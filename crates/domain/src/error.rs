// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while validating or evaluating a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more of the required form fields is absent.
    MissingFields,
    /// The submission and the event fall on the same calendar date.
    SameDaySubmission {
        /// The shared date.
        date: Date,
    },
    /// The submission date is after the event date.
    SubmittedAfterEvent {
        /// The date the registration was submitted.
        submitted_date: Date,
        /// The date of the event.
        event_date: Date,
    },
    /// The holiday count is negative.
    NegativeHolidays {
        /// The rejected count.
        count: i64,
    },
    /// A time field could not be parsed.
    InvalidTimeFormat {
        /// The form field the value came from.
        field: &'static str,
        /// The original, unparsed value.
        value: String,
    },
    /// A structured time has an hour or minute out of range.
    InvalidTimeOfDay {
        /// The rejected hour.
        hour: u8,
        /// The rejected minute.
        minute: u8,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(
                f,
                "Please fill out all required fields: date submitted, time submitted, event date and event time"
            ),
            Self::SameDaySubmission { date } => write!(
                f,
                "The event on {date} is the same day it was submitted. It is late, why even check?"
            ),
            Self::SubmittedAfterEvent {
                submitted_date,
                event_date,
            } => write!(
                f,
                "Date submitted ({submitted_date}) must be before the event date ({event_date})"
            ),
            Self::NegativeHolidays { count } => {
                write!(f, "Number of holidays cannot be negative, got {count}")
            }
            Self::InvalidTimeFormat { field, value } => write!(
                f,
                "Invalid time for {field}: '{value}'. Expected H:MM AM/PM, e.g. 3:00 pm"
            ),
            Self::InvalidTimeOfDay { hour, minute } => {
                write!(f, "Invalid time of day {hour}:{minute:02}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
