// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use late_event_domain::{
    EarlierBy, EvaluationResult, LatestSubmission, NoticePolicy, RawTimeInput,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// API request carrying a registration form.
///
/// Dates are ISO 8601 (`YYYY-MM-DD`). Omitted fields are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Date the registration was submitted.
    #[serde(default)]
    pub submitted_date: Option<String>,
    /// Time the registration was submitted.
    #[serde(default)]
    pub submitted_time: RawTimeInput,
    /// Date of the event.
    #[serde(default)]
    pub event_date: Option<String>,
    /// Time the event starts.
    #[serde(default)]
    pub event_start_time: RawTimeInput,
    /// Time the event ends (optional).
    #[serde(default)]
    pub event_end_time: RawTimeInput,
    /// Number of holidays to exclude.
    #[serde(default)]
    pub holiday_count: i64,
}

/// Outcome of validating a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the form may be evaluated.
    pub valid: bool,
    /// The user-facing error, when invalid.
    pub error_message: Option<String>,
    /// The offending field, when one can be named.
    pub field: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            error_message: None,
            field: None,
        }
    }

    #[must_use]
    pub fn invalid(message: String, field: Option<String>) -> Self {
        Self {
            valid: false,
            error_message: Some(message),
            field,
        }
    }
}

/// The latest on-time submission moment, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestSubmissionResponse {
    /// ISO 8601 date.
    pub date: String,
    pub weekday: String,
    /// Time in `H:MM am/pm` form.
    pub time: String,
}

impl From<&LatestSubmission> for LatestSubmissionResponse {
    fn from(latest: &LatestSubmission) -> Self {
        Self {
            date: latest.date.to_string(),
            weekday: latest.date.weekday().to_string(),
            time: latest.time.to_string(),
        }
    }
}

/// API response for an evaluated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// ISO 8601 date notice is counted from.
    pub effective_submission_date: String,
    pub effective_submission_weekday: String,
    /// ISO 8601 date of the event.
    pub event_date: String,
    pub event_weekday: String,
    /// Weekdays between the effective submission and the event.
    pub business_days_between: u32,
    pub holidays_excluded: u32,
    pub effective_business_days: u32,
    pub required_business_days: u32,
    pub on_time: bool,
    /// Estimated late fee.
    pub estimated_charge: Option<f64>,
    pub latest_allowed_submission: Option<LatestSubmissionResponse>,
    /// How much earlier the registration should have been submitted.
    pub earlier_by: Option<EarlierBy>,
    /// Informational notes for the user.
    pub notices: Vec<String>,
}

impl EvaluationResponse {
    /// Builds the display form of an evaluation.
    #[must_use]
    pub fn from_result(result: &EvaluationResult, event_date: Date) -> Self {
        Self {
            effective_submission_date: result.effective_submission_date.to_string(),
            effective_submission_weekday: result.effective_submission_date.weekday().to_string(),
            event_date: event_date.to_string(),
            event_weekday: event_date.weekday().to_string(),
            business_days_between: result.business_days_between,
            holidays_excluded: result.holidays_excluded,
            effective_business_days: result.effective_business_days,
            required_business_days: result.required_business_days,
            on_time: result.on_time,
            estimated_charge: result.estimated_charge,
            latest_allowed_submission: result
                .latest_allowed_submission
                .as_ref()
                .map(LatestSubmissionResponse::from),
            earlier_by: result.earlier_by,
            notices: result.notices.iter().map(ToString::to_string).collect(),
        }
    }
}

/// API response describing the active notice policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyResponse {
    pub required_business_days: u32,
    /// Close of business in `H:MM am/pm` form.
    pub business_close: String,
    pub hourly_rate: f64,
    pub search_horizon_days: u16,
}

impl From<&NoticePolicy> for PolicyResponse {
    fn from(policy: &NoticePolicy) -> Self {
        Self {
            required_business_days: policy.required_business_days,
            business_close: policy.business_close.to_string(),
            hourly_rate: policy.hourly_rate,
            search_horizon_days: policy.search_horizon_days,
        }
    }
}
