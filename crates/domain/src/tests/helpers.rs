// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RawTimeInput, SubmissionForm, ValidatedSubmission, validate_submission_form};
use time::Date;

pub fn text(value: &str) -> RawTimeInput {
    RawTimeInput::Text(value.to_string())
}

/// Builds a complete, valid form with no end time.
pub fn create_test_form(
    submitted_date: Date,
    submitted_time: &str,
    event_date: Date,
    event_start_time: &str,
    holiday_count: i64,
) -> SubmissionForm {
    SubmissionForm {
        submitted_date: Some(submitted_date),
        submitted_time: text(submitted_time),
        event_date: Some(event_date),
        event_start_time: text(event_start_time),
        event_end_time: RawTimeInput::Absent,
        holiday_count,
    }
}

pub fn validated(form: &SubmissionForm) -> ValidatedSubmission {
    validate_submission_form(form).expect("test form should validate")
}
