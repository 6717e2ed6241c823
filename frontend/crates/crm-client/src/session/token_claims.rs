//! Reads the claims segment of a stored bearer token.
//!
//! The signature is not checked; the server does that. The client only needs
//! `sub` and `role` to rebuild its session after a restart.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use crm_core::Session;
use serde_json::Value;

/// Claims recovered from a token payload. Missing or blank claims are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenClaims {
    pub sub: Option<String>,
    pub role: Option<String>,
}

impl TokenClaims {
    /// Session with the placeholder username and default role filled in.
    pub fn session(&self) -> Session {
        Session::from_claims(self.sub.as_deref(), self.role.as_deref())
    }
}

/// Decode `header.payload.signature`.
///
/// Returns `None` when the token doesn't have three segments, the middle
/// segment isn't base64, or it doesn't hold JSON. A JSON payload that isn't
/// an object decodes to empty claims.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return None;
    };

    let bytes = decode_segment(payload)?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;

    match value {
        Value::Null => None,
        Value::Object(claims) => Some(TokenClaims {
            sub: string_claim(&claims, "sub"),
            role: string_claim(&claims, "role"),
        }),
        _ => Some(TokenClaims::default()),
    }
}

fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    [URL_SAFE_NO_PAD, URL_SAFE, STANDARD, STANDARD_NO_PAD]
        .iter()
        .find_map(|engine| engine.decode(segment).ok())
}

fn string_claim(claims: &serde_json::Map<String, Value>, name: &str) -> Option<String> {
    claims
        .get(name)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
