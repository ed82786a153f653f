use crate::config::{Configuration, ConfigurationOptions};
use crate::domain::http::{HttpInfo, RequestContext, ResponseContext};
use crate::domain::model::{FilePostRequest, PetsFilteredPatchRequest, PetsPatchRequest};
use crate::domain::ports::{DefaultApi, RequestFactory, ResponseProcessor};
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Builds the `RequestContext` of each default API operation.
#[derive(Debug, Clone)]
pub struct DefaultApiRequestFactory {
    configuration: Configuration,
}

impl DefaultApiRequestFactory {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    fn json_request<T: Serialize>(
        &self,
        path: &str,
        method: Method,
        payload: Option<&T>,
        options: Option<&Configuration>,
    ) -> Result<RequestContext> {
        let config = options.unwrap_or(&self.configuration);

        let mut context = config.base_server.make_request_context(path, method)?;
        context.set_header_param("Content-Type", "application/json")?;

        // An absent payload sends no body at all.
        let body = payload.map(serde_json::to_string).transpose()?;
        context.set_body(body);

        if let Some(auth) = &config.auth_methods.default {
            auth.apply_security_authentication(&mut context)?;
        }

        Ok(context)
    }
}

impl RequestFactory for DefaultApiRequestFactory {
    /// `POST /file`
    fn file_post(
        &self,
        file_post_request: Option<&FilePostRequest>,
        options: Option<&Configuration>,
    ) -> Result<RequestContext> {
        self.json_request("/file", Method::POST, file_post_request, options)
    }

    /// `PATCH /pets-filtered`
    fn pets_filtered_patch(
        &self,
        pets_filtered_patch_request: Option<&PetsFilteredPatchRequest>,
        options: Option<&Configuration>,
    ) -> Result<RequestContext> {
        self.json_request(
            "/pets-filtered",
            Method::PATCH,
            pets_filtered_patch_request,
            options,
        )
    }

    /// `PATCH /pets`
    fn pets_patch(
        &self,
        pets_patch_request: Option<&PetsPatchRequest>,
        options: Option<&Configuration>,
    ) -> Result<RequestContext> {
        self.json_request("/pets", Method::PATCH, pets_patch_request, options)
    }
}

/// Turns raw responses of the default API into results.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultApiResponseProcessor;

impl ResponseProcessor for DefaultApiResponseProcessor {
    fn file_post_with_http_info(&self, response: ResponseContext) -> Result<HttpInfo<()>> {
        empty_success(response)
    }

    fn pets_filtered_patch_with_http_info(
        &self,
        response: ResponseContext,
    ) -> Result<HttpInfo<()>> {
        empty_success(response)
    }

    fn pets_patch_with_http_info(&self, response: ResponseContext) -> Result<HttpInfo<()>> {
        empty_success(response)
    }
}

/// 200 is the declared answer; other 2xx codes are accepted as well.
fn empty_success(response: ResponseContext) -> Result<HttpInfo<()>> {
    let status = response.http_status_code();

    if status.is_success() {
        if status != StatusCode::OK {
            tracing::debug!("Accepting undeclared success status {}", status);
        }
        let (status, headers, _) = response.into_parts();
        return Ok(HttpInfo::new(status, headers, ()));
    }

    let body = response.body_text();
    let (status, headers, _) = response.into_parts();
    Err(ApiError::UnexpectedStatus {
        status,
        message: "Unknown API Status Code!".to_string(),
        body,
        headers,
    })
}

/// `DefaultApi` over the configured transport and middleware chain.
///
/// Requests come from the request factory, which uses its own configuration
/// unless the call carries `ConfigurationOptions`. Transport and middleware
/// always come from this client's configuration merged with those options.
#[derive(Clone)]
pub struct ObservableDefaultApi {
    configuration: Configuration,
    request_factory: Arc<dyn RequestFactory>,
    response_processor: Arc<dyn ResponseProcessor>,
}

impl fmt::Debug for ObservableDefaultApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableDefaultApi")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}

impl ObservableDefaultApi {
    pub fn new(
        configuration: Configuration,
        request_factory: Option<Arc<dyn RequestFactory>>,
        response_processor: Option<Arc<dyn ResponseProcessor>>,
    ) -> Self {
        let request_factory = request_factory.unwrap_or_else(|| {
            Arc::new(DefaultApiRequestFactory::new(configuration.clone()))
        });
        let response_processor =
            response_processor.unwrap_or_else(|| Arc::new(DefaultApiResponseProcessor));

        Self {
            configuration,
            request_factory,
            response_processor,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    async fn execute(
        &self,
        config: &Configuration,
        mut request: RequestContext,
    ) -> Result<ResponseContext> {
        for middleware in &config.middleware {
            request = middleware.pre(request).await?;
        }

        tracing::debug!("{} {}", request.http_method(), request.url());
        let mut response = config.http_api.send(request).await?;

        for middleware in config.middleware.iter().rev() {
            response = middleware.post(response).await?;
        }

        Ok(response)
    }
}

#[async_trait]
impl DefaultApi for ObservableDefaultApi {
    async fn file_post_with_http_info(
        &self,
        file_post_request: Option<FilePostRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        let config = self.configuration.merge(options.as_ref());
        let overridden = options.as_ref().map(|_| &config);
        let request = self
            .request_factory
            .file_post(file_post_request.as_ref(), overridden)?;
        let response = self.execute(&config, request).await?;
        self.response_processor.file_post_with_http_info(response)
    }

    async fn file_post(
        &self,
        file_post_request: Option<FilePostRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        self.file_post_with_http_info(file_post_request, options)
            .await
            .map(HttpInfo::into_body)
    }

    async fn pets_filtered_patch_with_http_info(
        &self,
        pets_filtered_patch_request: Option<PetsFilteredPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        let config = self.configuration.merge(options.as_ref());
        let overridden = options.as_ref().map(|_| &config);
        let request = self
            .request_factory
            .pets_filtered_patch(pets_filtered_patch_request.as_ref(), overridden)?;
        let response = self.execute(&config, request).await?;
        self.response_processor
            .pets_filtered_patch_with_http_info(response)
    }

    async fn pets_filtered_patch(
        &self,
        pets_filtered_patch_request: Option<PetsFilteredPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        self.pets_filtered_patch_with_http_info(pets_filtered_patch_request, options)
            .await
            .map(HttpInfo::into_body)
    }

    async fn pets_patch_with_http_info(
        &self,
        pets_patch_request: Option<PetsPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        let config = self.configuration.merge(options.as_ref());
        let overridden = options.as_ref().map(|_| &config);
        let request = self
            .request_factory
            .pets_patch(pets_patch_request.as_ref(), overridden)?;
        let response = self.execute(&config, request).await?;
        self.response_processor.pets_patch_with_http_info(response)
    }

    async fn pets_patch(
        &self,
        pets_patch_request: Option<PetsPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        self.pets_patch_with_http_info(pets_patch_request, options)
            .await
            .map(HttpInfo::into_body)
    }
}
