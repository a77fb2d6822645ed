//! HTTP transport seam.
//!
//! Catalogs talk to the remote API only through [`Transport`], so tests can
//! serve canned JSON without a network.

use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use mushaf_core::{MushafError, Result};

use crate::config::ClientConfig;

/// Status code of a successful fetch.
pub const STATUS_OK: u16 = 200;

/// Status and body of one completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Returns `true` for a 200 response.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Blocking GET against the remote API.
pub trait Transport {
    /// Performs a GET of `url`.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::Transport` if no response was received. A
    /// response with any status is `Ok`.
    fn get(&self, url: &str) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<RawResponse> {
        (**self).get(url)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds a client sending the configured `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::Config` if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| MushafError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse> {
        let transport_err = |e: reqwest::Error| MushafError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport_err)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_err)?;
        Ok(RawResponse { status, body })
    }
}

/// Performs a GET and logs its outcome.
pub(crate) fn fetch<T: Transport + ?Sized>(transport: &T, url: &str) -> Result<RawResponse> {
    let start = Instant::now();
    let response = transport.get(url)?;
    debug!(
        url,
        status = response.status,
        bytes = response.body.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "fetched"
    );
    if !response.is_ok() {
        warn!(url, status = response.status, "remote API returned non-200 status");
    }
    Ok(response)
}

/// Performs a GET and decodes a 200 body as `T`.
///
/// # Errors
///
/// Returns `MushafError::RemoteUnavailable` for any non-200 status.
pub(crate) fn fetch_json<T, D>(transport: &T, url: &str) -> Result<D>
where
    T: Transport + ?Sized,
    D: DeserializeOwned,
{
    let response = fetch(transport, url)?;
    if !response.is_ok() {
        return Err(MushafError::RemoteUnavailable {
            status: response.status,
            url: url.to_string(),
        });
    }
    response.json()
}
