use crate::config::{Configuration, ConfigurationOptions};
use crate::domain::http::{HttpInfo, RequestContext, ResponseContext};
use crate::domain::model::{FilePostRequest, PetsFilteredPatchRequest, PetsPatchRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Transport that turns a `RequestContext` into a `ResponseContext`.
#[async_trait]
pub trait HttpLibrary: Send + Sync {
    async fn send(&self, request: RequestContext) -> Result<ResponseContext>;
}

/// Hooks around every request. `pre` hooks run in list order, `post` hooks in
/// reverse list order.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn pre(&self, context: RequestContext) -> Result<RequestContext>;
    async fn post(&self, context: ResponseContext) -> Result<ResponseContext>;
}

pub trait SecurityAuthentication: Send + Sync {
    fn name(&self) -> &str;
    fn apply_security_authentication(&self, context: &mut RequestContext) -> Result<()>;
}

/// Builds the outgoing request of each default API operation.
///
/// `options` is the effective configuration of the call when it was
/// overridden; implementations fall back to their own configuration otherwise.
pub trait RequestFactory: Send + Sync {
    fn file_post(
        &self,
        file_post_request: Option<&FilePostRequest>,
        options: Option<&Configuration>,
    ) -> Result<RequestContext>;

    fn pets_filtered_patch(
        &self,
        pets_filtered_patch_request: Option<&PetsFilteredPatchRequest>,
        options: Option<&Configuration>,
    ) -> Result<RequestContext>;

    fn pets_patch(
        &self,
        pets_patch_request: Option<&PetsPatchRequest>,
        options: Option<&Configuration>,
    ) -> Result<RequestContext>;
}

/// Decides what a raw response of each default API operation means.
pub trait ResponseProcessor: Send + Sync {
    fn file_post_with_http_info(&self, response: ResponseContext) -> Result<HttpInfo<()>>;

    fn pets_filtered_patch_with_http_info(
        &self,
        response: ResponseContext,
    ) -> Result<HttpInfo<()>>;

    fn pets_patch_with_http_info(&self, response: ResponseContext) -> Result<HttpInfo<()>>;
}

/// The default API in positional form: payload first, per-call overrides second.
#[async_trait]
pub trait DefaultApi: Send + Sync {
    async fn file_post_with_http_info(
        &self,
        file_post_request: Option<FilePostRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>>;

    async fn file_post(
        &self,
        file_post_request: Option<FilePostRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()>;

    async fn pets_filtered_patch_with_http_info(
        &self,
        pets_filtered_patch_request: Option<PetsFilteredPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>>;

    async fn pets_filtered_patch(
        &self,
        pets_filtered_patch_request: Option<PetsFilteredPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()>;

    async fn pets_patch_with_http_info(
        &self,
        pets_patch_request: Option<PetsPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>>;

    async fn pets_patch(
        &self,
        pets_patch_request: Option<PetsPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()>;
}
