use crate::core::engine::RenderMode;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "profile-render")]
#[command(about = "Renders profile and recent-photo HTML fragments")]
pub struct CliConfig {
    #[arg(long, value_enum)]
    pub mode: RenderMode,

    #[arg(long, help = "JSON input file (a person object or a photo array)")]
    pub input: String,

    #[arg(long, help = "Write markup to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}
