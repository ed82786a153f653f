use async_trait::async_trait;
use petstore_composed::config::AuthMethods;
use petstore_composed::core::DefaultApi;
use petstore_composed::{
    ApiError, Cat, ConfigurationOptions, DefaultApiFilePostRequest,
    DefaultApiPetsFilteredPatchRequest, DefaultApiPetsPatchRequest, Dog, DogBreed,
    FilePostRequest, HttpInfo, MiddlewareMergeStrategy, ObjectDefaultApi, PetByType,
    PetByTypePetType, PetsFilteredPatchRequest, PetsPatchRequest, Result, ServerConfiguration,
};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

/// What the inner client was called with.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    FilePost(Option<FilePostRequest>, bool),
    PetsFilteredPatch(Option<PetsFilteredPatchRequest>, bool),
    PetsPatch(Option<PetsPatchRequest>, bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Plain,
    WithHttpInfo,
}

struct RecordingApi {
    calls: Mutex<Vec<(Call, Shape)>>,
    options_seen: Mutex<Vec<Option<ConfigurationOptions>>>,
    fail_with: Option<StatusCode>,
}

impl RecordingApi {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            options_seen: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    fn failing(status: StatusCode) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::new()
        }
    }

    fn calls(&self) -> Vec<(Call, Shape)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(
        &self,
        call: Call,
        shape: Shape,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        self.calls.lock().unwrap().push((call, shape));
        self.options_seen.lock().unwrap().push(options);

        match self.fail_with {
            Some(status) => {
                let mut headers = HeaderMap::new();
                headers.insert("x-failure", "inner".parse().unwrap());
                Err(ApiError::UnexpectedStatus {
                    status,
                    message: "Unknown API Status Code!".to_string(),
                    body: "inner failure".to_string(),
                    headers,
                })
            }
            None => {
                let mut headers = HeaderMap::new();
                headers.insert("x-shape", format!("{shape:?}").parse().unwrap());
                Ok(HttpInfo::new(StatusCode::OK, headers, ()))
            }
        }
    }
}

#[async_trait]
impl DefaultApi for RecordingApi {
    async fn file_post_with_http_info(
        &self,
        file_post_request: Option<FilePostRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        let has_options = options.is_some();
        self.record(
            Call::FilePost(file_post_request, has_options),
            Shape::WithHttpInfo,
            options,
        )
    }

    async fn file_post(
        &self,
        file_post_request: Option<FilePostRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        let has_options = options.is_some();
        self.record(Call::FilePost(file_post_request, has_options), Shape::Plain, options)
            .map(HttpInfo::into_body)
    }

    async fn pets_filtered_patch_with_http_info(
        &self,
        pets_filtered_patch_request: Option<PetsFilteredPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        let has_options = options.is_some();
        self.record(
            Call::PetsFilteredPatch(pets_filtered_patch_request, has_options),
            Shape::WithHttpInfo,
            options,
        )
    }

    async fn pets_filtered_patch(
        &self,
        pets_filtered_patch_request: Option<PetsFilteredPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        let has_options = options.is_some();
        self.record(
            Call::PetsFilteredPatch(pets_filtered_patch_request, has_options),
            Shape::Plain,
            options,
        )
        .map(HttpInfo::into_body)
    }

    async fn pets_patch_with_http_info(
        &self,
        pets_patch_request: Option<PetsPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<HttpInfo<()>> {
        let has_options = options.is_some();
        self.record(
            Call::PetsPatch(pets_patch_request, has_options),
            Shape::WithHttpInfo,
            options,
        )
    }

    async fn pets_patch(
        &self,
        pets_patch_request: Option<PetsPatchRequest>,
        options: Option<ConfigurationOptions>,
    ) -> Result<()> {
        let has_options = options.is_some();
        self.record(Call::PetsPatch(pets_patch_request, has_options), Shape::Plain, options)
            .map(HttpInfo::into_body)
    }
}

#[tokio::test]
async fn empty_parameter_objects_forward_absent_payloads() {
    let api = ObjectDefaultApi::from_api(RecordingApi::new());

    api.file_post(Default::default(), None).await.unwrap();
    api.pets_filtered_patch(Default::default(), None).await.unwrap();
    api.pets_patch(Default::default(), None).await.unwrap();

    assert_eq!(
        api.inner().calls(),
        vec![
            (Call::FilePost(None, false), Shape::Plain),
            (Call::PetsFilteredPatch(None, false), Shape::Plain),
            (Call::PetsPatch(None, false), Shape::Plain),
        ]
    );
}

#[tokio::test]
async fn supplied_payloads_are_forwarded_unmodified() {
    let api = ObjectDefaultApi::from_api(RecordingApi::new());

    let file = FilePostRequest {
        file: Some(serde_json::json!({"name": "a.txt", "size": 3})),
    };
    let filtered = PetsFilteredPatchRequest::from(PetByType {
        pet_type: PetByTypePetType::Dog,
        hunts: None,
    });
    let patch = PetsPatchRequest::from(Dog {
        bark: Some(false),
        breed: Some(DogBreed::Shepherd),
    });

    api.file_post(
        DefaultApiFilePostRequest {
            file_post_request: Some(file.clone()),
        },
        None,
    )
    .await
    .unwrap();
    api.pets_filtered_patch(
        DefaultApiPetsFilteredPatchRequest {
            pets_filtered_patch_request: Some(filtered.clone()),
        },
        None,
    )
    .await
    .unwrap();
    api.pets_patch(
        DefaultApiPetsPatchRequest {
            pets_patch_request: Some(patch.clone()),
        },
        None,
    )
    .await
    .unwrap();

    assert_eq!(
        api.inner().calls(),
        vec![
            (Call::FilePost(Some(file), false), Shape::Plain),
            (Call::PetsFilteredPatch(Some(filtered), false), Shape::Plain),
            (Call::PetsPatch(Some(patch), false), Shape::Plain),
        ]
    );
}

#[tokio::test]
async fn plain_and_http_info_forms_differ_only_in_result_shape() {
    let api = ObjectDefaultApi::from_api(RecordingApi::new());
    let param = DefaultApiPetsPatchRequest {
        pets_patch_request: Some(PetsPatchRequest::from(Cat::default())),
    };

    api.pets_patch(param.clone(), None).await.unwrap();
    let info = api.pets_patch_with_http_info(param, None).await.unwrap();

    assert_eq!(info.status(), StatusCode::OK);
    assert_eq!(info.headers()["x-shape"], "WithHttpInfo");

    let calls = api.inner().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, calls[1].0);
    assert_eq!(calls[0].1, Shape::Plain);
    assert_eq!(calls[1].1, Shape::WithHttpInfo);

    api.file_post_with_http_info(Default::default(), None)
        .await
        .unwrap();
    api.pets_filtered_patch_with_http_info(Default::default(), None)
        .await
        .unwrap();
    let calls = api.inner().calls();
    assert_eq!(calls[2], (Call::FilePost(None, false), Shape::WithHttpInfo));
    assert_eq!(
        calls[3],
        (Call::PetsFilteredPatch(None, false), Shape::WithHttpInfo)
    );
}

#[tokio::test]
async fn per_call_options_reach_the_inner_client_unchanged() {
    let api = ObjectDefaultApi::from_api(RecordingApi::new());
    let server = ServerConfiguration::new(
        "https://{region}.example.xyz/v1",
        HashMap::from([("region".to_string(), "eu".to_string())]),
    );
    let options = ConfigurationOptions {
        base_server: Some(server.clone()),
        middleware: Some(Vec::new()),
        middleware_merge_strategy: Some(MiddlewareMergeStrategy::Prepend),
        auth_methods: Some(AuthMethods::default()),
        ..Default::default()
    };

    api.file_post(Default::default(), Some(options)).await.unwrap();

    assert_eq!(
        api.inner().calls(),
        vec![(Call::FilePost(None, true), Shape::Plain)]
    );
    let seen = api.inner().options_seen.lock().unwrap().clone();
    let forwarded = seen[0].as_ref().unwrap();
    assert_eq!(forwarded.base_server.as_ref(), Some(&server));
    assert_eq!(
        forwarded.middleware_merge_strategy,
        Some(MiddlewareMergeStrategy::Prepend)
    );
    assert_eq!(forwarded.middleware.as_ref().map(Vec::len), Some(0));
    assert!(forwarded.http_api.is_none());
    assert!(forwarded.auth_methods.as_ref().unwrap().default.is_none());
}

#[tokio::test]
async fn inner_failures_propagate_unchanged() {
    let api = ObjectDefaultApi::from_api(RecordingApi::failing(StatusCode::CONFLICT));

    let plain = api.pets_patch(Default::default(), None).await.unwrap_err();
    let info = api
        .file_post_with_http_info(Default::default(), None)
        .await
        .unwrap_err();

    for err in [plain, info] {
        match err {
            ApiError::UnexpectedStatus {
                status,
                message,
                body,
                headers,
            } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(message, "Unknown API Status Code!");
                assert_eq!(body, "inner failure");
                assert_eq!(headers["x-failure"], "inner");
            }
            other => panic!("error was translated: {other:?}"),
        }
    }
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let api = ObjectDefaultApi::from_api(RecordingApi::new());

    let (a, b, c) = tokio::join!(
        api.file_post(Default::default(), None),
        api.pets_patch_with_http_info(Default::default(), None),
        api.pets_filtered_patch(Default::default(), None),
    );
    tokio_test::assert_ok!(a);
    tokio_test::assert_ok!(b);
    tokio_test::assert_ok!(c);

    let calls = api.inner().calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.contains(&(Call::FilePost(None, false), Shape::Plain)));
    assert!(calls.contains(&(Call::PetsPatch(None, false), Shape::WithHttpInfo)));
    assert!(calls.contains(&(Call::PetsFilteredPatch(None, false), Shape::Plain)));
}
