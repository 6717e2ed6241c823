use crate::{
    ClientError, ClientResult, CredentialStore, Payload, RequestFailure, RequestOutcome,
    failure_message,
};

use std::sync::Arc;
use std::time::Duration;

use crm_config::ApiConfig;
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Pass as `body` for requests without one
pub const NO_BODY: Option<&Value> = None;

/// Issues every call to the customer API and normalizes the result.
///
/// Callers always get exactly one of a [`Payload`] or a [`RequestFailure`];
/// transport errors, error statuses and unparseable bodies are all folded
/// into those two shapes here.
pub struct Gateway {
    pub base_url: String,
    client: ReqwestClient,
    credentials: Arc<CredentialStore>,
}

impl Gateway {
    /// Create a gateway
    ///
    /// # Arguments
    /// * `base_url` - API address (e.g., "http://localhost:8080")
    /// * `timeout` - Upper bound for each request
    /// * `credentials` - Source of the bearer token
    pub fn new(
        base_url: &str,
        timeout: Duration,
        credentials: Arc<CredentialStore>,
    ) -> ClientResult<Self> {
        Url::parse(base_url).map_err(|e| ClientError::invalid_base_url(base_url, e.to_string()))?;

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
        })
    }

    /// Create a gateway from validated API settings
    pub fn from_config(api: &ApiConfig, credentials: Arc<CredentialStore>) -> ClientResult<Self> {
        api.validate()?;
        Self::new(&api.base_url, api.timeout(), credentials)
    }

    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    /// Absolute endpoint for a path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request with default headers.
    pub async fn send<B>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
        skip_auth: bool,
    ) -> RequestOutcome
    where
        B: Serialize + ?Sized,
    {
        self.send_with_headers(path, method, body, skip_auth, &HeaderMap::new())
            .await
    }

    /// Send a request; `headers` override the JSON content type and the
    /// bearer credential.
    pub async fn send_with_headers<B>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
        skip_auth: bool,
        headers: &HeaderMap,
    ) -> RequestOutcome
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let (request_headers, authorized) = self.build_headers(skip_auth, headers);

        debug!(
            "{method} {url} (auth: {})",
            if authorized { "bearer" } else { "skipped" }
        );

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        // Applied after `json()` so these replace whatever it set.
        request = request.headers(request_headers);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("{method} {url} failed before a response: {e}");
                return Err(RequestFailure::transport(e));
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!("{method} {url} failed reading the body: {e}");
                return Err(RequestFailure::transport(e));
            }
        };

        let payload = Payload::parse(&body);

        if !status.is_success() {
            let message = failure_message(status.as_u16(), &payload);
            warn!("{method} {url} -> {}: {message}", status.as_u16());
            return Err(RequestFailure::new(status.as_u16(), message));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Payload::Empty);
        }

        Ok(payload)
    }

    /// Content type, then bearer credential, then caller overrides.
    /// Returns whether a bearer credential was attached.
    fn build_headers(&self, skip_auth: bool, overrides: &HeaderMap) -> (HeaderMap, bool) {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut authorized = false;
        if !skip_auth && let Some(credential) = self.credentials.get() {
            match HeaderValue::from_str(&credential.bearer()) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                    authorized = true;
                }
                Err(_) => warn!("Stored token is not a valid header value; sending without it"),
            }
        }

        for (name, value) in overrides {
            headers.insert(name.clone(), value.clone());
        }

        (headers, authorized)
    }
}
