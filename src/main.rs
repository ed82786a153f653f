use anyhow::Context;
use clap::Parser;
use petstore_composed::config::cli::Command;
use petstore_composed::utils::error::ErrorCategory;
use petstore_composed::utils::logger::{self, LogFormat};
use petstore_composed::utils::validation::Validate;
use petstore_composed::{
    ApiError, CliConfig, ClientSettings, DefaultApiFilePostRequest,
    DefaultApiPetsFilteredPatchRequest, DefaultApiPetsPatchRequest, HttpInfo, ObjectDefaultApi,
};
use serde::de::DeserializeOwned;

fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> Result<Option<T>, ApiError> {
    body.map(serde_json::from_str).transpose().map_err(ApiError::from)
}

async fn call(
    api: &ObjectDefaultApi,
    command: &Command,
    with_http_info: bool,
) -> Result<Option<HttpInfo<()>>, ApiError> {
    match command {
        Command::FilePost { body } => {
            let param = DefaultApiFilePostRequest {
                file_post_request: parse_body(body.as_deref())?,
            };
            if with_http_info {
                api.file_post_with_http_info(param, None).await.map(Some)
            } else {
                api.file_post(param, None).await.map(|()| None)
            }
        }
        Command::PetsPatch { body } => {
            let param = DefaultApiPetsPatchRequest {
                pets_patch_request: parse_body(body.as_deref())?,
            };
            if with_http_info {
                api.pets_patch_with_http_info(param, None).await.map(Some)
            } else {
                api.pets_patch(param, None).await.map(|()| None)
            }
        }
        Command::PetsFilteredPatch { body } => {
            let param = DefaultApiPetsFilteredPatchRequest {
                pets_filtered_patch_request: parse_body(body.as_deref())?,
            };
            if with_http_info {
                api.pets_filtered_patch_with_http_info(param, None)
                    .await
                    .map(Some)
            } else {
                api.pets_filtered_patch(param, None).await.map(|()| None)
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(LogFormat::from_flags(config.json_logs), config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut settings = match &config.config {
        Some(path) => ClientSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => ClientSettings::default(),
    };
    if let Some(base_url) = &config.base_url {
        settings.server.base_url = Some(base_url.clone());
    }
    if let Some(timeout) = config.timeout_seconds {
        settings.server.timeout_seconds = Some(timeout);
    }

    let configuration = settings
        .into_configuration()
        .context("Invalid client settings")?;
    let api = ObjectDefaultApi::new(configuration, None, None);

    tracing::info!("Running {}", config.command.name());
    match call(&api, &config.command, config.http_info).await {
        Ok(info) => {
            if let Some(info) = info {
                println!("HTTP {}", info.status());
                for (name, value) in info.headers() {
                    println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
                }
            }
            println!("✅ {} succeeded", config.command.name());
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "{} failed: {} (Category: {:?})",
                config.command.name(),
                e,
                e.category()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            if let ApiError::UnexpectedStatus { body, .. } = &e {
                if !body.is_empty() {
                    eprintln!("{}", body);
                }
            }

            let exit_code = match e.category() {
                ErrorCategory::Api => 2,
                ErrorCategory::Network => 3,
                ErrorCategory::Data | ErrorCategory::Configuration => 1,
                ErrorCategory::System => 4,
            };
            std::process::exit(exit_code);
        }
    }
}
