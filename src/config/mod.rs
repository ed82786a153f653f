#[cfg(feature = "cli")]
pub mod cli;
pub mod servers;
pub mod settings;

pub use servers::{servers, ServerConfiguration};

use crate::adapters::http::ReqwestHttpLibrary;
use crate::domain::ports::{HttpLibrary, Middleware, SecurityAuthentication};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AuthMethods {
    /// Applied to every request built by the request factory.
    pub default: Option<Arc<dyn SecurityAuthentication>>,
}

impl fmt::Debug for AuthMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthMethods")
            .field("default", &self.default.as_ref().map(|a| a.name().to_string()))
            .finish()
    }
}

/// How per-call middleware combines with the configured middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MiddlewareMergeStrategy {
    #[default]
    Replace,
    Append,
    Prepend,
}

/// Connection settings shared by every call made through one client.
#[derive(Clone)]
pub struct Configuration {
    pub base_server: ServerConfiguration,
    pub http_api: Arc<dyn HttpLibrary>,
    pub middleware: Vec<Arc<dyn Middleware>>,
    pub auth_methods: AuthMethods,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_server", &self.base_server)
            .field("middleware", &self.middleware.len())
            .field("auth_methods", &self.auth_methods)
            .finish()
    }
}

impl Configuration {
    pub fn new() -> Self {
        let base_server = servers()
            .into_iter()
            .next()
            .unwrap_or_else(|| ServerConfiguration::new("http://localhost", Default::default()));

        Self {
            base_server,
            http_api: Arc::new(ReqwestHttpLibrary::new()),
            middleware: Vec::new(),
            auth_methods: AuthMethods::default(),
        }
    }

    pub fn with_base_server(mut self, base_server: ServerConfiguration) -> Self {
        self.base_server = base_server;
        self
    }

    pub fn with_http_api(mut self, http_api: Arc<dyn HttpLibrary>) -> Self {
        self.http_api = http_api;
        self
    }

    pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn with_auth_methods(mut self, auth_methods: AuthMethods) -> Self {
        self.auth_methods = auth_methods;
        self
    }

    /// The effective configuration for one call. `self` is left untouched.
    pub fn merge(&self, options: Option<&ConfigurationOptions>) -> Configuration {
        let Some(options) = options else {
            return self.clone();
        };

        let middleware = match &options.middleware {
            Some(extra) => match options.middleware_merge_strategy.unwrap_or_default() {
                MiddlewareMergeStrategy::Replace => extra.clone(),
                MiddlewareMergeStrategy::Append => {
                    self.middleware.iter().chain(extra).cloned().collect()
                }
                MiddlewareMergeStrategy::Prepend => {
                    extra.iter().chain(&self.middleware).cloned().collect()
                }
            },
            None => self.middleware.clone(),
        };

        Configuration {
            base_server: options
                .base_server
                .clone()
                .unwrap_or_else(|| self.base_server.clone()),
            http_api: options
                .http_api
                .clone()
                .unwrap_or_else(|| self.http_api.clone()),
            middleware,
            auth_methods: options
                .auth_methods
                .clone()
                .unwrap_or_else(|| self.auth_methods.clone()),
        }
    }
}

/// Per-call overrides. Unset fields fall back to the client's `Configuration`.
#[derive(Clone, Default)]
pub struct ConfigurationOptions {
    pub base_server: Option<ServerConfiguration>,
    pub http_api: Option<Arc<dyn HttpLibrary>>,
    pub middleware: Option<Vec<Arc<dyn Middleware>>>,
    pub middleware_merge_strategy: Option<MiddlewareMergeStrategy>,
    pub auth_methods: Option<AuthMethods>,
}

impl fmt::Debug for ConfigurationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationOptions")
            .field("base_server", &self.base_server)
            .field("http_api", &self.http_api.is_some())
            .field("middleware", &self.middleware.as_ref().map(Vec::len))
            .field("middleware_merge_strategy", &self.middleware_merge_strategy)
            .field("auth_methods", &self.auth_methods)
            .finish()
    }
}
