use crate::adapters::auth::BearerTokenAuthentication;
use crate::adapters::http::ReqwestHttpLibrary;
use crate::adapters::middleware::HeaderMiddleware;
use crate::config::{servers, AuthMethods, Configuration, ServerConfiguration};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Client settings as read from a TOML file.
///
/// ```toml
/// [server]
/// base_url = "http://api.example.xyz/v1"
/// timeout_seconds = 30
///
/// [headers]
/// X-Client = "petstore-cli"
///
/// [auth]
/// bearer_token = "${PETSTORE_TOKEN}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub server: ServerSettings,
    pub headers: Option<HashMap<String, String>>,
    pub auth: Option<AuthSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    pub bearer_token: Option<String>,
}

impl ClientSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_str(&content)
    }

    /// Parses the TOML, then expands `${VAR}` in the string values only.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let mut settings: Self = toml::from_str(content).map_err(|e| ApiError::ConfigError {
            message: format!("Settings TOML parsing error: {}", e),
        })?;
        settings.substitute_env_vars()?;
        Ok(settings)
    }

    fn substitute_env_vars(&mut self) -> Result<()> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            ApiError::ConfigError {
                message: e.to_string(),
            }
        })?;

        if let Some(base_url) = self.server.base_url.as_mut() {
            *base_url = expand_env(&re, base_url);
        }
        if let Some(headers) = self.headers.as_mut() {
            for value in headers.values_mut() {
                *value = expand_env(&re, value);
            }
        }
        if let Some(token) = self.auth.as_mut().and_then(|a| a.bearer_token.as_mut()) {
            *token = expand_env(&re, token);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.server.timeout_seconds.map(Duration::from_secs)
    }

    pub fn into_configuration(self) -> Result<Configuration> {
        self.validate()?;

        let base_server = match &self.server.base_url {
            Some(url) => ServerConfiguration::new(url.clone(), HashMap::new()),
            None => servers()
                .into_iter()
                .next()
                .ok_or_else(|| ApiError::MissingConfigError {
                    field: "server.base_url".to_string(),
                })?,
        };

        let mut http_api = ReqwestHttpLibrary::new();
        if let Some(timeout) = self.timeout() {
            http_api = http_api.with_timeout(timeout);
        }

        let mut configuration = Configuration::new()
            .with_base_server(base_server)
            .with_http_api(Arc::new(http_api));

        if let Some(headers) = self.headers.as_ref().filter(|h| !h.is_empty()) {
            configuration =
                configuration.with_middleware(Arc::new(HeaderMiddleware::from_pairs(headers)?));
        }

        if let Some(auth) = &self.auth {
            let token = validate_required_field("auth.bearer_token", &auth.bearer_token)?;
            configuration = configuration.with_auth_methods(AuthMethods {
                default: Some(Arc::new(BearerTokenAuthentication::new(token.clone()))),
            });
        }

        Ok(configuration)
    }
}

/// Unknown variables are left as written so validation can name them.
fn expand_env(re: &Regex, value: &str) -> String {
    re.replace_all(value, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}

fn reject_unresolved(field: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(ApiError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Unresolved environment variable".to_string(),
        });
    }
    Ok(())
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.server.base_url {
            reject_unresolved("server.base_url", base_url)?;
            validate_url("server.base_url", base_url)?;
        }

        if let Some(timeout) = self.server.timeout_seconds {
            validate_range("server.timeout_seconds", timeout, 1, 600)?;
        }

        if let Some(headers) = &self.headers {
            for (name, value) in headers {
                validate_non_empty_string("headers", name)?;
                reject_unresolved(&format!("headers.{}", name), value)?;
            }
        }

        if let Some(auth) = &self.auth {
            let token = validate_required_field("auth.bearer_token", &auth.bearer_token)?;
            validate_non_empty_string("auth.bearer_token", token)?;
            reject_unresolved("auth.bearer_token", token)?;
        }

        Ok(())
    }
}
