use crate::domain::http::RequestContext;
use crate::utils::error::{ApiError, Result};
use reqwest::Method;
use std::collections::HashMap;
use url::Url;

/// A server URL template such as `https://{region}.example.xyz/v1` plus the
/// values for its `{variables}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfiguration {
    url_template: String,
    variables: HashMap<String, String>,
}

impl ServerConfiguration {
    pub fn new(url_template: impl Into<String>, variables: HashMap<String, String>) -> Self {
        Self {
            url_template: url_template.into(),
            variables,
        }
    }

    pub fn set_variables(&mut self, variables: HashMap<String, String>) {
        self.variables.extend(variables);
    }

    /// The template with every known variable substituted.
    pub fn url(&self) -> String {
        let mut url = self.url_template.clone();
        for (name, value) in &self.variables {
            url = url.replace(&format!("{{{}}}", name), value);
        }
        url
    }

    pub fn make_request_context(&self, endpoint: &str, method: Method) -> Result<RequestContext> {
        let raw = format!("{}{}", self.url().trim_end_matches('/'), endpoint);

        if raw.contains('{') && raw.contains('}') {
            return Err(ApiError::ConfigError {
                message: format!("Unresolved server variables in URL: {}", raw),
            });
        }

        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(RequestContext::new(url, method))
    }
}

/// Servers declared by the API, first one is the default.
pub fn servers() -> Vec<ServerConfiguration> {
    vec![ServerConfiguration::new(
        "http://api.example.xyz/v1",
        HashMap::new(),
    )]
}
