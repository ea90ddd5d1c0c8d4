// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use late_event_domain::{
    EvaluationResult, Notice, NoticePolicy, SubmissionForm, ValidatedSubmission,
    evaluate_submission, validate_submission_form,
};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{EvaluationResponse, SubmissionRequest, ValidationResult};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Translates an API request into a domain form.
///
/// Blank or omitted dates become absent so the validator can report them
/// as missing.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a date is present but not `YYYY-MM-DD`.
pub fn to_submission_form(request: &SubmissionRequest) -> Result<SubmissionForm, ApiError> {
    Ok(SubmissionForm {
        submitted_date: parse_date("submitted_date", request.submitted_date.as_deref())?,
        submitted_time: request.submitted_time.clone(),
        event_date: parse_date("event_date", request.event_date.as_deref())?,
        event_start_time: request.event_start_time.clone(),
        event_end_time: request.event_end_time.clone(),
        holiday_count: request.holiday_count,
    })
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<Date>, ApiError> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    Date::parse(value, ISO_DATE)
        .map(Some)
        .map_err(|e| ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Failed to parse date '{value}': {e}"),
        })
}

fn validated_submission(request: &SubmissionRequest) -> Result<ValidatedSubmission, ApiError> {
    let form: SubmissionForm = to_submission_form(request)?;
    validate_submission_form(&form).map_err(translate_domain_error)
}

/// Validates a registration form.
///
/// Every failure is reported in the returned value; nothing is raised.
#[must_use]
pub fn validate(request: &SubmissionRequest) -> ValidationResult {
    match validated_submission(request) {
        Ok(_) => ValidationResult::valid(),
        Err(err) => {
            debug!(error = %err, "Form failed validation");
            ValidationResult::invalid(err.message().to_string(), err.field().map(String::from))
        }
    }
}

/// Validates and evaluates a registration form.
///
/// # Arguments
///
/// * `request` - The form as submitted
/// * `policy` - The notice rules to apply
///
/// # Returns
///
/// * `Ok(EvaluationResponse)` with the on-time decision and, for late
///   submissions, the charge estimate and latest on-time submission
/// * `Err(ApiError)` if the form is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A date does not parse
/// - Any validation rule fails
/// - Date arithmetic runs past the end of the calendar
pub fn evaluate(
    request: &SubmissionRequest,
    policy: &NoticePolicy,
) -> Result<EvaluationResponse, ApiError> {
    let submission: ValidatedSubmission = validated_submission(request)?;

    let result: EvaluationResult =
        evaluate_submission(&submission, policy).map_err(translate_domain_error)?;

    debug!(
        effective_submission_date = %result.effective_submission_date,
        business_days = result.business_days_between,
        holidays = result.holidays_excluded,
        "Counted business days"
    );

    for notice in &result.notices {
        match notice {
            Notice::SearchExhausted { horizon_days } => {
                warn!(
                    event_date = %submission.event_date(),
                    horizon_days,
                    "No on-time submission date within search horizon"
                );
            }
            Notice::NegativeCharge => {
                warn!(charge = ?result.estimated_charge, "Event ends before it starts");
            }
            Notice::SubmittedBeforeLatestAllowed => {
                debug!("Submission precedes latest allowed moment but is still late");
            }
        }
    }

    info!(
        submitted_date = %submission.submitted_date(),
        event_date = %submission.event_date(),
        effective_business_days = result.effective_business_days,
        on_time = result.on_time,
        "Evaluated submission"
    );

    Ok(EvaluationResponse::from_result(&result, submission.event_date()))
}
