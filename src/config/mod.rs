pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_input_file, validate_non_empty_string, validate_required_field, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_SUFFIX: &str = ".template";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "templatize")]
#[command(about = "Rewrites gateway admin pages into templated form")]
pub struct CliConfig {
    #[arg(help = "Path to the HTML file to templatize")]
    pub input_path: Option<String>,

    #[arg(long, help = "Suffix appended to the input path for the output file")]
    pub suffix: Option<String>,

    #[arg(long, help = "Load settings from a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges command-line arguments with the optional TOML config file.
    /// Command-line values win; the suffix falls back to `.template`.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file_config = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let input_path = self.input_path.clone().or_else(|| {
            file_config
                .as_ref()
                .and_then(|c| c.source.input_path.clone())
        });
        let input_path = validate_required_field("input_path", &input_path)?.clone();

        let suffix = self
            .suffix
            .clone()
            .or_else(|| {
                file_config
                    .as_ref()
                    .and_then(|c| c.load.as_ref())
                    .and_then(|l| l.suffix.clone())
            })
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());

        Ok(ResolvedConfig { input_path, suffix })
    }
}

/// Effective settings the pipeline runs with, after CLI/TOML merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub input_path: String,
    pub suffix: String,
}

impl ConfigProvider for ResolvedConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_suffix(&self) -> &str {
        &self.suffix
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_input_file("input_path", &self.input_path)?;
        validate_non_empty_string("suffix", &self.suffix)?;
        Ok(())
    }
}
