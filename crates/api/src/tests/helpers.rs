// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use late_event_domain::RawTimeInput;

use crate::SubmissionRequest;

pub fn text(value: &str) -> RawTimeInput {
    RawTimeInput::Text(value.to_string())
}

/// A form submitted Tuesday 2024-01-02 at 2:00 pm for an event on
/// Monday 2024-01-22 at 3:00 pm, with no holidays.
pub fn create_test_request() -> SubmissionRequest {
    SubmissionRequest {
        submitted_date: Some(String::from("2024-01-02")),
        submitted_time: text("2:00 pm"),
        event_date: Some(String::from("2024-01-22")),
        event_start_time: text("3:00 pm"),
        event_end_time: RawTimeInput::Absent,
        holiday_count: 0,
    }
}
