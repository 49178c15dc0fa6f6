// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Url;

/// Structured outcome of one transport call: the HTTP status and the raw
/// body, with no further interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code of the response.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Object-safe HTTP seam of the fetch pipeline.
///
/// The pipeline only issues GET requests and classifies the status/body
/// pair itself, so the seam stays this narrow. Tests substitute canned
/// implementations; production uses [`HttpTransport`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one GET.
    ///
    /// Any transport-level failure (DNS, connection, timeout) is folded
    /// into [`FetchError::Connection`].
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError>;
}

/// [`Transport`] backed by an explicitly constructed [`reqwest::Client`].
///
/// The client is injected rather than read from any ambient global, so
/// callers stay in charge of its configuration and tests can substitute
/// the whole transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Wrap an owned client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|_| FetchError::Connection)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|_| FetchError::Connection)?
            .to_vec();
        Ok(TransportResponse { status, body })
    }
}
