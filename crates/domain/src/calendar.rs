// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business-day arithmetic.
//!
//! ## Invariants
//!
//! - Business days are Monday-Friday; holidays are not known here
//! - Counting is over the half-open interval `(start, end]`
//! - The caller subtracts holidays from any count

use crate::error::DomainError;
use time::{Date, Weekday};

/// Returns true for Saturday and Sunday.
#[must_use]
pub const fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Returns the first weekday strictly after `date`.
///
/// Always advances at least one day, even when `date` is a weekday.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the calendar runs out
/// before a weekday is reached.
pub fn next_business_day(date: Date) -> Result<Date, DomainError> {
    let mut current: Date = following_day(date)?;
    while is_weekend(current) {
        current = following_day(current)?;
    }
    Ok(current)
}

fn following_day(date: Date) -> Result<Date, DomainError> {
    date.next_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("advancing past {date}"),
        })
}

/// Counts weekdays in `(start, end]`.
///
/// Returns 0 when `end <= start`. Holidays are not subtracted.
#[must_use]
pub fn business_days_between_exclusive(start: Date, end: Date) -> u32 {
    let mut count: u32 = 0;
    let mut current: Date = start;

    while current < end {
        // current < end, so a following day always exists
        let Some(next) = current.next_day() else {
            break;
        };
        current = next;

        if !is_weekend(current) {
            count += 1;
        }
    }

    count
}
