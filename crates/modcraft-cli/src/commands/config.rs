//! `modcraft config`: show the effective configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    let text = match cmd {
        ConfigCommands::Get { key } => lookup(&config, &key)?,
        ConfigCommands::List => toml::to_string_pretty(&config)
            .map_err(|e| CliError::ConfigError {
                message: "could not render the effective configuration".into(),
                source: Some(Box::new(e)),
            })?
            .trim_end()
            .to_owned(),
        ConfigCommands::Path => AppConfig::active_path(config_file).display().to_string(),
    };
    output.print(&text)?;
    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    config
        .get(key)
        .ok_or_else(|| CliError::config(format!("Unknown config key: '{key}'")))
}
