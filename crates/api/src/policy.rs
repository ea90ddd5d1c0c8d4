// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notice policy configuration.
//!
//! This module turns raw operator configuration into a `NoticePolicy`.

use late_event_domain::{NoticePolicy, TimeOfDay, parse_time_of_day};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notice policy configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// No notice would ever be required.
    #[error("Required business days must be greater than 0")]
    ZeroRequiredDays,

    /// The close-of-business time does not parse.
    #[error("Business close '{value}' must be a time like 5:00 pm")]
    InvalidBusinessClose { value: String },

    /// The hourly rate is negative, infinite or NaN.
    #[error("Hourly rate must be a finite, non-negative amount (got {value})")]
    InvalidHourlyRate { value: String },

    /// The deadline search would not look at any earlier date.
    #[error("Search horizon must be at least 1 day")]
    ZeroSearchHorizon,
}

/// Raw notice policy configuration, as supplied on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Business days of notice required.
    pub required_business_days: u32,
    /// Close of business in `H:MM AM/PM` form.
    pub business_close: String,
    /// Late fee per hour of event.
    pub hourly_rate: f64,
    /// Days before the event the deadline search looks back.
    pub search_horizon_days: u16,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let policy: NoticePolicy = NoticePolicy::default();
        Self {
            required_business_days: policy.required_business_days,
            business_close: policy.business_close.to_string(),
            hourly_rate: policy.hourly_rate,
            search_horizon_days: policy.search_horizon_days,
        }
    }
}

impl PolicyConfig {
    /// Validates the configuration and builds a policy from it.
    ///
    /// # Errors
    ///
    /// Returns a `PolicyError` if any setting is out of range or the
    /// business close time does not parse.
    pub fn build(&self) -> Result<NoticePolicy, PolicyError> {
        if self.required_business_days == 0 {
            return Err(PolicyError::ZeroRequiredDays);
        }

        let business_close: TimeOfDay = parse_time_of_day(&self.business_close).map_err(|_| {
            PolicyError::InvalidBusinessClose {
                value: self.business_close.clone(),
            }
        })?;

        if !self.hourly_rate.is_finite() || self.hourly_rate < 0.0 {
            return Err(PolicyError::InvalidHourlyRate {
                value: self.hourly_rate.to_string(),
            });
        }

        if self.search_horizon_days == 0 {
            return Err(PolicyError::ZeroSearchHorizon);
        }

        Ok(NoticePolicy {
            required_business_days: self.required_business_days,
            business_close,
            hourly_rate: self.hourly_rate,
            search_horizon_days: self.search_horizon_days,
        })
    }
}
