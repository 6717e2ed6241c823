use crate::{ClientError, CredentialStore, Gateway};

use std::sync::Arc;
use std::time::Duration;

use crm_config::ApiConfig;

fn gateway(base_url: &str) -> Result<Gateway, ClientError> {
    Gateway::new(
        base_url,
        Duration::from_secs(5),
        Arc::new(CredentialStore::in_memory()),
    )
}

#[test]
fn given_trailing_slash_when_new_then_trimmed() {
    let gateway = gateway("http://localhost:8080/").unwrap();
    assert_eq!(gateway.base_url, "http://localhost:8080");
}

#[test]
fn given_no_trailing_slash_when_new_then_unchanged() {
    let gateway = gateway("http://localhost:8080").unwrap();
    assert_eq!(gateway.base_url, "http://localhost:8080");
}

#[test]
fn given_path_when_endpoint_then_appended_to_base() {
    let gateway = gateway("http://localhost:8080/").unwrap();
    assert_eq!(
        gateway.endpoint("/api/customers/3"),
        "http://localhost:8080/api/customers/3"
    );
}

#[test]
fn given_invalid_url_when_new_then_invalid_base_url_error() {
    let result = gateway("localhost without scheme");
    assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));
}

#[test]
fn given_invalid_config_when_from_config_then_config_error() {
    let api = ApiConfig {
        timeout_secs: 0,
        ..Default::default()
    };

    let result = Gateway::from_config(&api, Arc::new(CredentialStore::in_memory()));

    assert!(matches!(result, Err(ClientError::Config { .. })));
}

#[test]
fn given_default_config_when_from_config_then_default_base_url() {
    let gateway =
        Gateway::from_config(&ApiConfig::default(), Arc::new(CredentialStore::in_memory()))
            .unwrap();
    assert_eq!(gateway.base_url, "http://localhost:8080");
}
