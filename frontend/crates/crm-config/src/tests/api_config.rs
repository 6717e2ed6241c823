use crate::ApiConfig;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_defaults_when_validate_then_ok() {
    assert_that!(ApiConfig::default().validate(), ok(anything()));
}

#[test]
fn given_https_url_when_validate_then_ok() {
    let config = ApiConfig {
        base_url: "https://crm.example.com/".to_string(),
        ..Default::default()
    };
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_ftp_url_when_validate_then_error() {
    let config = ApiConfig {
        base_url: "ftp://crm.example.com".to_string(),
        ..Default::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("http or https"));
}

#[test]
fn given_zero_timeout_when_validate_then_error() {
    let config = ApiConfig {
        timeout_secs: 0,
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_timeout_above_max_when_validate_then_error() {
    let config = ApiConfig {
        timeout_secs: crate::MAX_TIMEOUT_SECS + 1,
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_timeout_secs_when_timeout_then_duration() {
    let config = ApiConfig {
        timeout_secs: 7,
        ..Default::default()
    };
    assert_eq!(config.timeout(), Duration::from_secs(7));
}
