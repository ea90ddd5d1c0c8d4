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
    clippy::all
)]

mod error;
mod handlers;
mod policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{evaluate, to_submission_form, validate};
pub use policy::{PolicyConfig, PolicyError};
pub use request_response::{
    EvaluationResponse, LatestSubmissionResponse, PolicyResponse, SubmissionRequest,
    ValidationResult,
};
