use crate::{DEFAULT_ROLE, Session, UNKNOWN_USER};

#[test]
fn given_no_claims_when_from_claims_then_defaults() {
    let session = Session::from_claims(None, None);

    assert_eq!(session.username, UNKNOWN_USER);
    assert_eq!(session.role, DEFAULT_ROLE);
    assert!(session.authenticated);
}

#[test]
fn given_admin_role_when_is_admin_then_true() {
    let session = Session::from_claims(Some("alice"), Some("ADMIN"));

    assert_eq!(session.username, "alice");
    assert!(session.is_admin());
}
