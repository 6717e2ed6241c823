use serde::Serialize;

/// Role assumed when the token does not claim one
pub const DEFAULT_ROLE: &str = "USER";
/// Username shown when the token has no `sub` claim
pub const UNKNOWN_USER: &str = "Unknown User";

/// In-memory session derived from the stored token. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub username: String,
    pub role: String,
    pub authenticated: bool,
}

impl Session {
    pub fn authenticated(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
            authenticated: true,
        }
    }

    /// Build from optional claims, falling back to the defaults.
    pub fn from_claims(sub: Option<&str>, role: Option<&str>) -> Self {
        Self::authenticated(sub.unwrap_or(UNKNOWN_USER), role.unwrap_or(DEFAULT_ROLE))
    }

    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("ADMIN")
    }
}
