use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::DispatchError;
use crate::request::LookupRequest;

/// Raw server reply; the body is never interpreted here
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub status: u16,
    pub body: String,
}

/// Transport for lookup requests
#[async_trait]
pub trait LookupClient: Send + Sync + 'static {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, DispatchError>;
}

#[derive(Clone, Default)]
pub struct HttpLookupClient {
    client: reqwest::Client,
}

impl HttpLookupClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LookupClient for HttpLookupClient {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, DispatchError> {
        let response = self
            .client
            .get(request.url())
            .header(CONTENT_TYPE, "text/plain")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(LookupResponse { status, body })
    }
}
