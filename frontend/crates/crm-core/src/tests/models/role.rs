use crate::Role;

#[test]
fn given_default_role_then_user() {
    assert_eq!(Role::default(), Role::User);
}

#[test]
fn given_lowercase_when_parse_then_ok() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("USER".parse::<Role>(), Ok(Role::User));
}

#[test]
fn given_unknown_when_parse_then_err() {
    assert!("root".parse::<Role>().is_err());
}

#[test]
fn given_role_when_serialize_then_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
}
