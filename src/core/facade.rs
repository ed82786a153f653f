use crate::config::{Configuration, ConfigurationOptions};
use crate::core::default_api::ObservableDefaultApi;
use crate::domain::http::HttpInfo;
use crate::domain::model::{FilePostRequest, PetsFilteredPatchRequest, PetsPatchRequest};
use crate::domain::ports::{DefaultApi, RequestFactory, ResponseProcessor};
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultApiFilePostRequest {
    pub file_post_request: Option<FilePostRequest>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultApiPetsFilteredPatchRequest {
    pub pets_filtered_patch_request: Option<PetsFilteredPatchRequest>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultApiPetsPatchRequest {
    pub pets_patch_request: Option<PetsPatchRequest>,
}

/// Default API with one parameter object per call.
///
/// Every method unpacks its parameter object and hands the field, together
/// with `options`, to the inner `DefaultApi`. Errors come back untouched.
#[derive(Debug, Clone)]
pub struct ObjectDefaultApi<A: DefaultApi = ObservableDefaultApi> {
    api: A,
}

impl ObjectDefaultApi<ObservableDefaultApi> {
    /// `None` strategies fall back to `DefaultApiRequestFactory` over
    /// `configuration` and `DefaultApiResponseProcessor`.
    pub fn new(
        configuration: Configuration,
        request_factory: Option<Arc<dyn RequestFactory>>,
        response_processor: Option<Arc<dyn ResponseProcessor>>,
    ) -> Self {
        Self {
            api: ObservableDefaultApi::new(configuration, request_factory, response_processor),
        }
    }
}

impl<A: DefaultApi> ObjectDefaultApi<A> {
    pub fn from_api(api: A) -> Self {
        Self { api }
    }

    pub fn inner(&self) -> &A {
        &self.api
    }

    pub async fn file_post_with_http_info(
        &self,
        param: DefaultApiFilePostRequest,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        self.api
            .file_post_with_http_info(param.file_post_request, options)
            .await
    }

    pub async fn file_post(
        &self,
        param: DefaultApiFilePostRequest,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        self.api.file_post(param.file_post_request, options).await
    }

    pub async fn pets_filtered_patch_with_http_info(
        &self,
        param: DefaultApiPetsFilteredPatchRequest,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        self.api
            .pets_filtered_patch_with_http_info(param.pets_filtered_patch_request, options)
            .await
    }

    pub async fn pets_filtered_patch(
        &self,
        param: DefaultApiPetsFilteredPatchRequest,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        self.api
            .pets_filtered_patch(param.pets_filtered_patch_request, options)
            .await
    }

    pub async fn pets_patch_with_http_info(
        &self,
        param: DefaultApiPetsPatchRequest,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        self.api
            .pets_patch_with_http_info(param.pets_patch_request, options)
            .await
    }

    pub async fn pets_patch(
        &self,
        param: DefaultApiPetsPatchRequest,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        self.api.pets_patch(param.pets_patch_request, options).await
    }
}
