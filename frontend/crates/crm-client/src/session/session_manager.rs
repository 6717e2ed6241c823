use crate::customers::{CUSTOMERS_PATH, records_from_payload};
use crate::{
    CredentialStore, Gateway, LoginResult, NO_BODY, Payload, RequestFailure, RequestOutcome,
    decode_claims,
};

use std::sync::Arc;

use crm_core::{Credential, CustomerRecord, DEFAULT_ROLE, Role, Session};
use log::{info, warn};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PERMISSIONS_PATH: &str = "/api/me/permissions";
pub const NO_TOKEN_MESSAGE: &str = "Login failed: no token received";

// Login responses may name the token either way.
const TOKEN_FIELDS: [&str; 2] = ["token", "accessToken"];

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    role: Role,
}

/// Login, registration and session restore on top of the gateway.
pub struct SessionManager {
    gateway: Arc<Gateway>,
}

impl SessionManager {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    fn credentials(&self) -> &CredentialStore {
        self.gateway.credentials()
    }

    /// Log in and hydrate permissions and customers.
    ///
    /// Success means the server issued a usable token. The token is stored
    /// before anything else happens; the permission and customer fetches
    /// then run concurrently and their failures only cost their data.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, RequestFailure> {
        let body = LoginRequest { username, password };
        let payload = self
            .gateway
            .send(LOGIN_PATH, Method::POST, Some(&body), true)
            .await?;

        let payload = payload.into_object().unwrap_or_default();
        let token = extract_token(&payload).ok_or_else(|| RequestFailure::new(0, NO_TOKEN_MESSAGE))?;

        // Overwrites any previous credential, permissions included.
        self.credentials().set(&token, Some(&[]));
        info!("Login succeeded for {username}");

        let (permissions, customers) =
            tokio::join!(self.fetch_permissions(), self.fetch_customers());

        let session = decode_claims(&token)
            .map(|claims| claims.session())
            .unwrap_or_else(|| {
                let name = payload
                    .get("username")
                    .and_then(Value::as_str)
                    .unwrap_or(username);
                Session::authenticated(name, DEFAULT_ROLE)
            });

        Ok(LoginResult {
            payload,
            token,
            permissions,
            customers,
            session,
        })
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, username: &str, password: &str, role: Role) -> RequestOutcome {
        let body = RegisterRequest {
            username,
            password,
            role,
        };
        let outcome = self
            .gateway
            .send(REGISTER_PATH, Method::POST, Some(&body), true)
            .await;

        if outcome.is_ok() {
            info!("Registered {username} as {role}");
        }
        outcome
    }

    /// Rebuild the session from the stored token.
    ///
    /// A token whose claims can't be decoded is cleared along with the
    /// permissions, and the caller sees no session.
    pub fn restore_session(&self) -> Option<Session> {
        let token = self.credentials().token()?;

        match decode_claims(&token) {
            Some(claims) => Some(claims.session()),
            None => {
                warn!("Stored token is malformed; clearing session");
                self.credentials().clear();
                None
            }
        }
    }

    pub fn logout(&self) {
        self.credentials().clear();
        info!("Logged out");
    }

    pub fn current_credential(&self) -> Option<Credential> {
        self.credentials().get()
    }

    async fn fetch_permissions(&self) -> Vec<String> {
        match self
            .gateway
            .send(PERMISSIONS_PATH, Method::GET, NO_BODY, false)
            .await
        {
            Ok(payload) => {
                let permissions = permissions_from_payload(&payload);
                self.credentials().set_permissions(&permissions);
                permissions
            }
            Err(failure) => {
                warn!("Fetching permissions failed: {failure}");
                Vec::new()
            }
        }
    }

    async fn fetch_customers(&self) -> Vec<CustomerRecord> {
        match self
            .gateway
            .send(CUSTOMERS_PATH, Method::GET, NO_BODY, false)
            .await
        {
            Ok(payload) => records_from_payload(payload),
            Err(failure) => {
                warn!("Fetching customers failed: {failure}");
                Vec::new()
            }
        }
    }
}

fn extract_token(payload: &Map<String, Value>) -> Option<String> {
    TOKEN_FIELDS
        .iter()
        .filter_map(|field| payload.get(*field).and_then(Value::as_str))
        .find(|token| !token.is_empty())
        .map(String::from)
}

fn permissions_from_payload(payload: &Payload) -> Vec<String> {
    payload
        .get("permissions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
