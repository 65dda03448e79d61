use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::error::HttpError;

use super::tls::apply_tls_settings;
use super::{ProbeResponse, RequestDescriptor, Transport};

const USER_AGENT: &str = concat!("mercury-probe/", env!("CARGO_PKG_VERSION"));

/// Client-level options shared by every send of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportOptions {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub insecure: bool,
}

/// Builds the single client a run reuses for all sends.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialized.
pub fn build_client(options: &TransportOptions) -> Result<Client, HttpError> {
    let builder = Client::builder()
        .timeout(options.timeout)
        .connect_timeout(options.connect_timeout)
        .user_agent(USER_AGENT);
    let builder = apply_tls_settings(builder, options);

    builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        HttpError::BuildClientFailed { source: err }
    })
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error when the client cannot be built.
    pub fn from_options(options: &TransportOptions) -> Result<Self, HttpError> {
        build_client(options).map(Self::new)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<ProbeResponse, HttpError> {
        let response = self
            .client
            .request(request.method.clone(), request.uri.clone())
            .headers(request.headers.clone())
            .body(request.body.clone())
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed { source: err })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| HttpError::ReadBodyFailed { source: err })?;
        debug!("{} {} -> {}", request.method, request.uri, status);
        Ok(ProbeResponse { status, body })
    }
}
