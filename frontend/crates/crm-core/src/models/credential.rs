use std::fmt;

use serde::Serialize;

/// The stored bearer token plus the cached permission list.
///
/// At most one is live at a time; a new login overwrites it.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub token: String,
    pub permissions: Vec<String>,
}

impl Credential {
    pub fn new(token: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            token: token.into(),
            permissions,
        }
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Keeps tokens out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("permissions", &self.permissions)
            .finish()
    }
}
