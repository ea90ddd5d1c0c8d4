// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for notice policy configuration.

use late_event_domain::{NoticePolicy, TimeOfDay};

use crate::{PolicyConfig, PolicyError, PolicyResponse};

#[test]
fn test_default_config_builds_default_policy() {
    let policy: NoticePolicy = PolicyConfig::default().build().unwrap();
    assert_eq!(policy, NoticePolicy::default());
}

#[test]
fn test_custom_business_close() {
    let config: PolicyConfig = PolicyConfig {
        business_close: String::from("4:30 PM"),
        ..PolicyConfig::default()
    };
    let policy: NoticePolicy = config.build().unwrap();
    assert_eq!(policy.business_close, TimeOfDay::new(16, 30).unwrap());
}

#[test]
fn test_rejects_zero_required_days() {
    let config: PolicyConfig = PolicyConfig {
        required_business_days: 0,
        ..PolicyConfig::default()
    };
    assert_eq!(config.build(), Err(PolicyError::ZeroRequiredDays));
}

#[test]
fn test_rejects_unparseable_business_close() {
    let config: PolicyConfig = PolicyConfig {
        business_close: String::from("17:00"),
        ..PolicyConfig::default()
    };
    let err: PolicyError = config.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Business close '17:00' must be a time like 5:00 pm"
    );
}

#[test]
fn test_rejects_bad_hourly_rate() {
    for rate in [-1.0, f64::NAN, f64::INFINITY] {
        let config: PolicyConfig = PolicyConfig {
            hourly_rate: rate,
            ..PolicyConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(PolicyError::InvalidHourlyRate { .. })
        ));
    }
}

#[test]
fn test_rejects_zero_search_horizon() {
    let config: PolicyConfig = PolicyConfig {
        search_horizon_days: 0,
        ..PolicyConfig::default()
    };
    assert_eq!(config.build(), Err(PolicyError::ZeroSearchHorizon));
}

#[test]
fn test_policy_response_formats_close() {
    let response: PolicyResponse = PolicyResponse::from(&NoticePolicy::default());
    assert_eq!(response.business_close, "5:00 pm");
    assert_eq!(response.required_business_days, 14);
    assert_eq!(response.search_horizon_days, 365);
}
