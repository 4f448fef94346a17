// src/core/net.rs
// Single blocking HTTP GET per call. No retries; the caller decides what a failure means.

use std::time::Duration;

use crate::error::TransportError;

const USER_AGENT: &str = concat!("cne_scrape/", env!("CARGO_PKG_VERSION"));

/// Status line + decoded body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }
}

/// The network seam. Anything that can answer a GET with query parameters.
///
/// An `Err` means the server was never reached (or the exchange broke mid-way);
/// any status code the server did send comes back as `Ok`.
pub trait Transport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}

/// `reqwest` blocking client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// `timeout: None` waits forever, as a plain socket would.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let resp = self.client.get(url).query(query).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }
}
