// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation of a validated submission against the notice policy.
//!
//! ## Invariants
//!
//! - At most one cutoff shift is applied, based on the original time
//! - `effective_business_days = max(0, business_days_between - holidays)`
//! - A submission is on time iff `effective_business_days >= required`
//! - Charge and deadline search only run for late submissions

use crate::calendar::{business_days_between_exclusive, next_business_day};
use crate::charge::estimate_charge;
use crate::deadline::{earlier_by, find_latest_on_time};
use crate::error::DomainError;
use crate::policy::NoticePolicy;
use crate::types::{
    EarlierBy, EvaluationResult, LatestSubmission, Notice, TimeOfDay, ValidatedSubmission,
};
use time::Date;

/// Returns true when a submission counts from the next business day.
///
/// That is the case after close of business, or after the event's start
/// time when one is known.
#[must_use]
pub fn requires_shift(
    submitted_time: TimeOfDay,
    event_start_time: Option<TimeOfDay>,
    policy: &NoticePolicy,
) -> bool {
    submitted_time > policy.business_close
        || event_start_time.is_some_and(|start| submitted_time > start)
}

/// The date from which notice is counted.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the shift runs past
/// the end of the calendar.
pub fn effective_submission_date(
    submitted_date: Date,
    submitted_time: TimeOfDay,
    event_start_time: Option<TimeOfDay>,
    policy: &NoticePolicy,
) -> Result<Date, DomainError> {
    if requires_shift(submitted_time, event_start_time, policy) {
        next_business_day(submitted_date)
    } else {
        Ok(submitted_date)
    }
}

/// Business days left once holidays are excluded, floored at zero.
#[must_use]
pub const fn effective_business_days(business_days: u32, holidays: u32) -> u32 {
    business_days.saturating_sub(holidays)
}

/// Evaluates a validated submission.
///
/// # Arguments
///
/// * `submission` - A submission produced by `validate_submission_form`
/// * `policy` - The notice rules to apply
///
/// # Returns
///
/// The full `EvaluationResult`. A late submission also carries the
/// estimated charge (when an end time is known), the latest on-time
/// submission and how much earlier it should have been made. A fruitless
/// deadline search is reported as a notice.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if date arithmetic runs
/// past the end of the calendar.
pub fn evaluate_submission(
    submission: &ValidatedSubmission,
    policy: &NoticePolicy,
) -> Result<EvaluationResult, DomainError> {
    let event_start_time: Option<TimeOfDay> = Some(submission.event_start_time());

    let effective_date: Date = effective_submission_date(
        submission.submitted_date(),
        submission.submitted_time(),
        event_start_time,
        policy,
    )?;

    let business_days: u32 = business_days_between_exclusive(effective_date, submission.event_date());
    let holidays: u32 = submission.holidays();
    let effective_days: u32 = effective_business_days(business_days, holidays);
    let on_time: bool = effective_days >= policy.required_business_days;

    let mut notices: Vec<Notice> = Vec::new();
    let mut estimated_charge: Option<f64> = None;
    let mut latest_allowed_submission: Option<LatestSubmission> = None;
    let mut earlier: Option<EarlierBy> = None;

    if !on_time {
        if let Some(end) = submission.event_end_time() {
            let charge: f64 = estimate_charge(submission.event_start_time(), end, policy.hourly_rate);
            if charge < 0.0 {
                notices.push(Notice::NegativeCharge);
            }
            estimated_charge = Some(charge);
        }

        match find_latest_on_time(submission.event_date(), event_start_time, holidays, policy)? {
            Some(latest) => {
                earlier = earlier_by(submission.submitted_at(), &latest);
                if earlier.is_none() {
                    notices.push(Notice::SubmittedBeforeLatestAllowed);
                }
                latest_allowed_submission = Some(latest);
            }
            None => notices.push(Notice::SearchExhausted {
                horizon_days: policy.search_horizon_days,
            }),
        }
    }

    Ok(EvaluationResult {
        effective_submission_date: effective_date,
        business_days_between: business_days,
        holidays_excluded: holidays,
        effective_business_days: effective_days,
        required_business_days: policy.required_business_days,
        on_time,
        estimated_charge,
        latest_allowed_submission,
        earlier_by: earlier,
        notices,
    })
}
