//! HTTP transport used by the lookup client.
//!
//! The client only ever issues unauthenticated GETs and reads back a status
//! and a body, so the seam is a single-method [`Transport`] trait. The
//! default implementation is a blocking `reqwest` client; tests and
//! embedders can plug in their own.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config;
use crate::error::{Result, ScryfallError};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET and returns whatever the server answered.
///
/// Implementations must only fail when no response was obtained at all
/// (connection refused, timeout, TLS...). Non-2xx statuses are *not*
/// errors at this layer.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<RawResponse>;
}

/// Blocking `reqwest` transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with the given request timeout and `User-Agent`.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(config::MAX_REDIRECTS))
            .build()
            .map_err(|e| {
                ScryfallError::InvalidArgument(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?;
        Ok(RawResponse::new(status, body.to_vec()))
    }
}
