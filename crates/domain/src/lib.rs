// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod charge;
mod deadline;
mod error;
mod policy;
mod submission;
mod time_input;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{business_days_between_exclusive, is_weekend, next_business_day};
pub use charge::estimate_charge;
pub use deadline::{allowed_latest_time, earlier_by, find_latest_on_time};
pub use submission::{
    effective_business_days, effective_submission_date, evaluate_submission, requires_shift,
};
pub use time_input::{NormalizationFailure, normalize, parse_time_of_day};
pub use validation::{validate_date_order, validate_submission_form};

// Re-export public types
pub use error::DomainError;
pub use policy::{DEFAULT_BUSINESS_CLOSE, NoticePolicy};
pub use types::{
    EarlierBy, EvaluationResult, LatestSubmission, Notice, RawTimeInput, SubmissionForm,
    TimeOfDay, ValidatedSubmission,
};
