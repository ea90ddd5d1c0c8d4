// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::TimeOfDay;

/// Estimates the late fee for an event from its duration.
///
/// The fee is `hourly_rate` times the fractional hours between `start`
/// and `end`. It is not floored at zero: an end time before the start
/// time yields a negative charge.
#[must_use]
pub fn estimate_charge(start: TimeOfDay, end: TimeOfDay, hourly_rate: f64) -> f64 {
    let minutes: i32 = end.minutes_since_midnight() - start.minutes_since_midnight();
    hourly_rate * f64::from(minutes) / 60.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_three_hour_event() {
        let start: TimeOfDay = TimeOfDay::new(15, 0).unwrap();
        let end: TimeOfDay = TimeOfDay::new(18, 0).unwrap();
        assert!((estimate_charge(start, end, 200.0) - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_hours() {
        let start: TimeOfDay = TimeOfDay::new(9, 0).unwrap();
        let end: TimeOfDay = TimeOfDay::new(10, 30).unwrap();
        assert!((estimate_charge(start, end, 200.0) - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_end_before_start_is_negative() {
        let start: TimeOfDay = TimeOfDay::new(18, 0).unwrap();
        let end: TimeOfDay = TimeOfDay::new(17, 0).unwrap();
        assert!((estimate_charge(start, end, 200.0) + 200.0).abs() < f64::EPSILON);
    }
}
