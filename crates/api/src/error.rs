// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use late_event_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// The user-facing message, without the error category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DomainRuleViolation { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Internal { message } => message.as_str(),
        }
    }

    /// The form field the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field.as_str()),
            Self::DomainRuleViolation { .. } | Self::Internal { .. } => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingFields => ApiError::InvalidInput {
            field: String::from("form"),
            message,
        },
        DomainError::SameDaySubmission { .. } | DomainError::SubmittedAfterEvent { .. } => {
            ApiError::DomainRuleViolation {
                rule: String::from("submitted_before_event"),
                message,
            }
        }
        DomainError::NegativeHolidays { .. } => ApiError::InvalidInput {
            field: String::from("holiday_count"),
            message,
        },
        DomainError::InvalidTimeFormat { field, .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        DomainError::InvalidTimeOfDay { .. } => ApiError::InvalidInput {
            field: String::from("time"),
            message,
        },
        DomainError::DateArithmeticOverflow { .. } => ApiError::Internal { message },
    }
}
