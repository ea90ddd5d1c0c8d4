// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::TimeOfDay;
use time::macros::time;

/// Close of business. Submissions after this count from the next business day.
pub const DEFAULT_BUSINESS_CLOSE: TimeOfDay = TimeOfDay::from_time(time!(17:00));

/// Notice rules a submission is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoticePolicy {
    /// Business days of notice required for a submission to be on time.
    pub required_business_days: u32,
    /// Cutoff time after which a submission counts from the next business day.
    pub business_close: TimeOfDay,
    /// Late fee per hour of event duration.
    pub hourly_rate: f64,
    /// How many days before the event the deadline search looks back.
    pub search_horizon_days: u16,
}

impl Default for NoticePolicy {
    fn default() -> Self {
        Self {
            required_business_days: 14,
            business_close: DEFAULT_BUSINESS_CLOSE,
            hourly_rate: 200.0,
            search_horizon_days: 365,
        }
    }
}
