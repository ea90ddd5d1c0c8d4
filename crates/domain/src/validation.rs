// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::time_input::{NormalizationFailure, normalize};
use crate::types::{RawTimeInput, SubmissionForm, TimeOfDay, ValidatedSubmission};
use time::Date;

/// Validates a raw form and normalizes its time fields.
///
/// Checks run in order and the first failure is returned.
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `form` - The form as collected by the presentation layer
///
/// # Returns
///
/// * `Ok(ValidatedSubmission)` ready for evaluation
/// * `Err(DomainError)` describing the first rule that failed
///
/// # Errors
///
/// Returns an error if:
/// - Either date, the submitted time or the event start time is missing
/// - The submission is not strictly before the event
/// - The holiday count is negative
/// - The submitted or event start time does not parse
/// - The event end time is provided and does not parse
pub fn validate_submission_form(form: &SubmissionForm) -> Result<ValidatedSubmission, DomainError> {
    // Rule: all four required fields are present
    let (Some(submitted_date), Some(event_date)) = (form.submitted_date, form.event_date) else {
        return Err(DomainError::MissingFields);
    };
    if form.submitted_time.is_absent() || form.event_start_time.is_absent() {
        return Err(DomainError::MissingFields);
    }

    // Rule: submission must be strictly before the event
    validate_date_order(submitted_date, event_date)?;

    // Rule: holiday count must not be negative
    if form.holiday_count < 0 {
        return Err(DomainError::NegativeHolidays {
            count: form.holiday_count,
        });
    }
    let holidays: u32 = u32::try_from(form.holiday_count).unwrap_or(u32::MAX);

    // Rule: required times must parse
    let submitted_time: TimeOfDay = normalize_field("submitted_time", &form.submitted_time)?;
    let event_start_time: TimeOfDay =
        normalize_field("event_start_time", &form.event_start_time)?;

    // Rule: an end time, when given, must parse
    let event_end_time: Option<TimeOfDay> = if form.event_end_time.is_absent() {
        None
    } else {
        Some(normalize_field("event_end_time", &form.event_end_time)?)
    };

    Ok(ValidatedSubmission::new(
        submitted_date,
        submitted_time,
        event_date,
        event_start_time,
        event_end_time,
        holidays,
    ))
}

/// Validates that a submission date is strictly before the event date.
///
/// # Errors
///
/// Returns `DomainError::SameDaySubmission` when the dates are equal and
/// `DomainError::SubmittedAfterEvent` when the submission is later.
pub fn validate_date_order(submitted_date: Date, event_date: Date) -> Result<(), DomainError> {
    if submitted_date == event_date {
        return Err(DomainError::SameDaySubmission { date: event_date });
    }
    if submitted_date > event_date {
        return Err(DomainError::SubmittedAfterEvent {
            submitted_date,
            event_date,
        });
    }
    Ok(())
}

fn normalize_field(field: &'static str, input: &RawTimeInput) -> Result<TimeOfDay, DomainError> {
    normalize(input).map_err(|failure| match failure {
        NormalizationFailure::Missing => DomainError::MissingFields,
        NormalizationFailure::BadFormat => DomainError::InvalidTimeFormat {
            field,
            value: input.original_value(),
        },
    })
}
