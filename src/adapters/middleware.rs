use crate::domain::http::{parse_header, RequestContext, ResponseContext};
use crate::domain::ports::Middleware;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Adds a fixed set of headers to every outgoing request.
#[derive(Debug, Clone, Default)]
pub struct HeaderMiddleware {
    headers: HeaderMap,
}

impl HeaderMiddleware {
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            let (header_name, header_value) = parse_header(name.as_ref(), value.as_ref())?;
            headers.insert(header_name, header_value);
        }
        Ok(Self { headers })
    }
}

#[async_trait]
impl Middleware for HeaderMiddleware {
    async fn pre(&self, mut context: RequestContext) -> Result<RequestContext> {
        for (name, value) in &self.headers {
            context.headers_mut().insert(name.clone(), value.clone());
        }
        Ok(context)
    }

    async fn post(&self, context: ResponseContext) -> Result<ResponseContext> {
        Ok(context)
    }
}
