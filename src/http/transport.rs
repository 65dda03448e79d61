use async_trait::async_trait;

use crate::error::HttpError;

use super::RequestDescriptor;

/// A fully received response. Bodies are read to completion so each timed
/// send covers the whole exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

impl ProbeResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends one request and waits for its complete response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<ProbeResponse, HttpError>;
}
