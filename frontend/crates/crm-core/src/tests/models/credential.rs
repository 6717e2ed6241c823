use crate::Credential;

#[test]
fn given_credential_when_debug_then_token_redacted() {
    let credential = Credential::new("secret.token.value", vec!["READ".to_string()]);

    let debug = format!("{credential:?}");

    assert!(!debug.contains("secret.token.value"));
    assert!(debug.contains("READ"));
}

#[test]
fn given_credential_when_bearer_then_prefixed() {
    let credential = Credential::new("abc", vec![]);
    assert_eq!(credential.bearer(), "Bearer abc");
}
