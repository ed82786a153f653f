use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "petstore-composed")]
#[command(about = "Call the composed-schemas petstore API")]
pub struct CliConfig {
    #[arg(long, help = "TOML settings file")]
    pub config: Option<String>,

    #[arg(long, help = "Override the server base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Per-request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Print status and headers along with the result")]
    pub http_info: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// POST /file
    FilePost {
        #[arg(long, help = "JSON request body; omitted means no body")]
        body: Option<String>,
    },
    /// PATCH /pets with a Cat or Dog (tagged by pet_type)
    PetsPatch {
        #[arg(long, help = "JSON request body; omitted means no body")]
        body: Option<String>,
    },
    /// PATCH /pets-filtered with a PetByAge or PetByType
    PetsFilteredPatch {
        #[arg(long, help = "JSON request body; omitted means no body")]
        body: Option<String>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::FilePost { .. } => "file-post",
            Command::PetsPatch { .. } => "pets-patch",
            Command::PetsFilteredPatch { .. } => "pets-filtered-patch",
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 600)?;
        }
        Ok(())
    }
}
