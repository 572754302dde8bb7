//! TOML run file parsing

use super::RunConfig;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML run file
pub fn parse_toml_file(path: &Path) -> Result<RunConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML run configuration from string
pub fn parse_toml_string(contents: &str) -> Result<RunConfig> {
    let config: RunConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with a run configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: RunConfig) -> RunConfig {
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(shots) = cli.shots {
        config.shots = shots;
    }
    if let Some(ref out) = cli.out {
        config.out = out.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.max_batches.is_some() {
        config.max_batches = cli.max_batches;
    }
    if cli.json {
        config.json = true;
    }
    config
}

/// Build the run configuration: defaults, then TOML file, then CLI flags
pub fn build_config(cli: &Cli) -> Result<RunConfig> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => RunConfig::default(),
    };
    Ok(merge_cli_with_config(cli, base))
}
