// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingFields;
    assert_eq!(
        format!("{err}"),
        "Please fill out all required fields: date submitted, time submitted, event date and event time"
    );

    let err: DomainError = DomainError::SameDaySubmission {
        date: date!(2024 - 01 - 22),
    };
    assert_eq!(
        format!("{err}"),
        "The event on 2024-01-22 is the same day it was submitted. It is late, why even check?"
    );

    let err: DomainError = DomainError::SubmittedAfterEvent {
        submitted_date: date!(2024 - 01 - 23),
        event_date: date!(2024 - 01 - 22),
    };
    assert_eq!(
        format!("{err}"),
        "Date submitted (2024-01-23) must be before the event date (2024-01-22)"
    );

    let err: DomainError = DomainError::NegativeHolidays { count: -1 };
    assert_eq!(
        format!("{err}"),
        "Number of holidays cannot be negative, got -1"
    );

    let err: DomainError = DomainError::InvalidTimeFormat {
        field: "submitted_time",
        value: String::from("3pm"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid time for submitted_time: '3pm'. Expected H:MM AM/PM, e.g. 3:00 pm"
    );

    let err: DomainError = DomainError::InvalidTimeOfDay { hour: 24, minute: 5 };
    assert_eq!(format!("{err}"), "Invalid time of day 24:05");

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("advancing past 9999-12-31"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while advancing past 9999-12-31"
    );
}
