pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{
    settings::ClientSettings, Configuration, ConfigurationOptions, MiddlewareMergeStrategy,
    ServerConfiguration,
};
pub use crate::core::{
    default_api::{DefaultApiRequestFactory, DefaultApiResponseProcessor, ObservableDefaultApi},
    facade::{
        DefaultApiFilePostRequest, DefaultApiPetsFilteredPatchRequest, DefaultApiPetsPatchRequest,
        ObjectDefaultApi,
    },
};
pub use domain::http::HttpInfo;
pub use domain::model::*;
pub use utils::error::{ApiError, Result};
