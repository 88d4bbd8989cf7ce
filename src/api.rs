// API client module: a small blocking HTTP client that sends the sign-in
// request. One POST per call, library-default timeout, no retries.

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::error::SendError;

/// Request body expected by the sign-in endpoint: the credentials nested
/// under a single `credentials` key.
#[derive(Serialize, Debug)]
pub struct SignInPayload<'a> {
    pub credentials: &'a Value,
}

/// Blocking client bound to the configured sign-in endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    url: String,
}

impl ApiClient {
    /// Create a client for `url` using reqwest's defaults.
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, url))
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        ApiClient {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST `{"credentials": credentials}` to the endpoint. Any 2xx status
    /// is a success; the response body is never read.
    pub fn sign_in(&self, credentials: &Value) -> Result<StatusCode, SendError> {
        let payload = SignInPayload { credentials };
        tracing::debug!(url = %self.url, "posting sign-in request");

        let res = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&payload)
            .send()
            .map_err(SendError::Transport)?;

        let status = res.status();
        res.error_for_status()
            .map_err(|source| SendError::Status { status, source })?;

        tracing::debug!(%status, "sign-in request accepted");
        Ok(status)
    }
}
