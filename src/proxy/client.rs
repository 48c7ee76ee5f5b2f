//! Backend forwarding client.
//!
//! Thin wrapper over a shared `reqwest::Client` that replays an inbound
//! request against the model runtime and hands back the raw reply. Forwards
//! are single-shot: no retries, no timeout — the caller decides what a
//! failure means.

use hyper::body::Bytes;
use hyper::{Method, StatusCode};
use thiserror::Error;

/// Raw reply from the backend, relayed to the original client unmodified
#[derive(Debug)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Errors from forwarding a request to the backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend never accepted the connection
    #[error("Backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    /// The forward failed after the connection was established
    #[error("{0}")]
    Forward(#[from] reqwest::Error),
}

/// Forwarder bound to one backend base URL
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Forward a request verbatim: method, path and query, raw body bytes.
    ///
    /// The body is attached only when non-empty; the Content-Type is always
    /// declared JSON, matching what the model runtime expects on every route.
    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        body: Bytes,
    ) -> Result<BackendReply, BackendError> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let mut request = self
            .client
            .request(method, url)
            .header("Content-Type", "application/json");
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                BackendError::Unreachable(e)
            } else {
                BackendError::Forward(e)
            }
        })?;

        let status = response.status();
        let body = response.bytes().await?;

        Ok(BackendReply { status, body })
    }
}
