// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    LatestSubmission, NoticePolicy, TimeOfDay, allowed_latest_time, earlier_by,
    effective_submission_date, find_latest_on_time, requires_shift,
};
use time::Date;
use time::macros::{date, datetime};

#[test]
fn test_allowed_latest_time_is_earlier_of_close_and_start() {
    let policy: NoticePolicy = NoticePolicy::default();

    assert_eq!(allowed_latest_time(None, &policy), policy.business_close);
    assert_eq!(
        allowed_latest_time(Some(TimeOfDay::new(15, 0).unwrap()), &policy),
        TimeOfDay::new(15, 0).unwrap()
    );
    assert_eq!(
        allowed_latest_time(Some(TimeOfDay::new(19, 0).unwrap()), &policy),
        policy.business_close
    );
}

#[test]
fn test_allowed_latest_time_never_shifts() {
    let policy: NoticePolicy = NoticePolicy::default();
    for hour in 0..24 {
        let start: TimeOfDay = TimeOfDay::new(hour, 30).unwrap();
        let allowed: TimeOfDay = allowed_latest_time(Some(start), &policy);

        assert!(!requires_shift(allowed, Some(start), &policy));
        assert_eq!(
            effective_submission_date(date!(2024 - 01 - 06), allowed, Some(start), &policy)
                .unwrap(),
            date!(2024 - 01 - 06)
        );
    }
}

#[test]
fn test_find_latest_on_time_without_holidays() {
    let latest: LatestSubmission = find_latest_on_time(
        date!(2024 - 01 - 22),
        Some(TimeOfDay::new(15, 0).unwrap()),
        0,
        &NoticePolicy::default(),
    )
    .unwrap()
    .unwrap();

    assert_eq!(latest.date, date!(2024 - 01 - 02));
    assert_eq!(latest.time, TimeOfDay::new(15, 0).unwrap());
}

#[test]
fn test_find_latest_on_time_prefers_latest_calendar_date() {
    let policy: NoticePolicy = NoticePolicy {
        required_business_days: 1,
        ..NoticePolicy::default()
    };

    // Monday event: Sunday already leaves one business day
    let latest: LatestSubmission = find_latest_on_time(date!(2024 - 01 - 22), None, 0, &policy)
        .unwrap()
        .unwrap();

    assert_eq!(latest.date, date!(2024 - 01 - 21));
    assert_eq!(latest.time, policy.business_close);
}

#[test]
fn test_find_latest_on_time_with_zero_requirement_is_event_date() {
    let policy: NoticePolicy = NoticePolicy {
        required_business_days: 0,
        ..NoticePolicy::default()
    };
    let latest = find_latest_on_time(date!(2024 - 01 - 22), None, 0, &policy).unwrap();
    assert_eq!(latest.map(|l| l.date), Some(date!(2024 - 01 - 22)));
}

#[test]
fn test_find_latest_on_time_exhausts_horizon() {
    let result = find_latest_on_time(
        date!(2024 - 01 - 22),
        None,
        400,
        &NoticePolicy::default(),
    )
    .unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_find_latest_on_time_respects_short_horizon() {
    let policy: NoticePolicy = NoticePolicy {
        search_horizon_days: 10,
        ..NoticePolicy::default()
    };
    let result = find_latest_on_time(date!(2024 - 01 - 22), None, 0, &policy).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_find_latest_on_time_stops_at_calendar_start() {
    let result = find_latest_on_time(Date::MIN, None, 0, &NoticePolicy::default()).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_earlier_by_for_later_submission() {
    let latest: LatestSubmission = LatestSubmission {
        date: date!(2024 - 01 - 02),
        time: TimeOfDay::new(15, 0).unwrap(),
    };

    let earlier = earlier_by(datetime!(2024 - 01 - 03 16:45), &latest).unwrap();

    assert_eq!(earlier.days, 1);
    assert_eq!(earlier.hours, 1);
    assert_eq!(earlier.minutes, 45);
}

#[test]
fn test_earlier_by_is_none_when_not_after_latest() {
    let latest: LatestSubmission = LatestSubmission {
        date: date!(2024 - 01 - 07),
        time: TimeOfDay::new(15, 0).unwrap(),
    };

    assert_eq!(earlier_by(datetime!(2024 - 01 - 07 15:00), &latest), None);
    assert_eq!(earlier_by(datetime!(2024 - 01 - 05 18:00), &latest), None);
}
