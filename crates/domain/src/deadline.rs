// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backward search for the latest on-time submission.
//!
//! Candidate dates are walked backward one calendar day at a time,
//! starting at the event date itself. Each candidate is submitted at the
//! latest allowed time and run through the same cutoff shift as a real
//! submission. The first candidate that meets the threshold is the
//! latest qualifying date.
//!
//! The allowed time is `min(business_close, event_start)`, so the cutoff
//! shift never fires for a candidate. The shift is still applied so both
//! paths share one rule.

use crate::calendar::business_days_between_exclusive;
use crate::error::DomainError;
use crate::policy::NoticePolicy;
use crate::submission::{effective_business_days, effective_submission_date};
use crate::types::{EarlierBy, LatestSubmission, TimeOfDay};
use time::{Date, Duration, PrimitiveDateTime};

/// The latest time of day a submission can be made without being shifted.
#[must_use]
pub fn allowed_latest_time(event_start_time: Option<TimeOfDay>, policy: &NoticePolicy) -> TimeOfDay {
    event_start_time.map_or(policy.business_close, |start| {
        start.min(policy.business_close)
    })
}

/// Finds the latest moment a submission would have been on time.
///
/// Scans `policy.search_horizon_days + 1` candidate dates, from the event
/// date backward.
///
/// # Returns
///
/// * `Ok(Some(LatestSubmission))` for the latest qualifying date and time
/// * `Ok(None)` if no candidate within the horizon qualifies
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if a candidate's cutoff
/// shift runs past the end of the calendar.
pub fn find_latest_on_time(
    event_date: Date,
    event_start_time: Option<TimeOfDay>,
    holidays: u32,
    policy: &NoticePolicy,
) -> Result<Option<LatestSubmission>, DomainError> {
    let allowed_time: TimeOfDay = allowed_latest_time(event_start_time, policy);

    for offset in 0..=i64::from(policy.search_horizon_days) {
        // Stop at the start of the calendar
        let Some(candidate) = event_date.checked_sub(Duration::days(offset)) else {
            break;
        };

        let effective_date: Date =
            effective_submission_date(candidate, allowed_time, event_start_time, policy)?;
        let business_days: u32 = business_days_between_exclusive(effective_date, event_date);

        if effective_business_days(business_days, holidays) >= policy.required_business_days {
            return Ok(Some(LatestSubmission {
                date: candidate,
                time: allowed_time,
            }));
        }
    }

    Ok(None)
}

/// How much later `submitted_at` is than the latest allowed moment.
///
/// Returns `None` when the submission is not after it.
#[must_use]
pub fn earlier_by(submitted_at: PrimitiveDateTime, latest: &LatestSubmission) -> Option<EarlierBy> {
    let difference: Duration = submitted_at - latest.datetime();
    if difference.is_positive() {
        Some(EarlierBy::from_duration(difference))
    } else {
        None
    }
}
