use crate::domain::http::{RequestContext, ResponseContext};
use crate::domain::ports::HttpLibrary;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// `HttpLibrary` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpLibrary {
    client: Client,
    timeout: Option<Duration>,
}

impl Default for ReqwestHttpLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestHttpLibrary {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl HttpLibrary for ReqwestHttpLibrary {
    async fn send(&self, request: RequestContext) -> Result<ResponseContext> {
        let (method, url, headers, body) = request.into_parts();

        tracing::debug!("Sending {} {}", method, url);
        let mut builder = self.client.request(method, url).headers(headers);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        tracing::debug!("Response status: {} ({} bytes)", status, body.len());
        Ok(ResponseContext::new(status, headers, body))
    }
}
