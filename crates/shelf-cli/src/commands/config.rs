//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use shelf_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config = Config::load_with_cli_override(config_path.map(PathBuf::as_path))
        .context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "external_url": config.external_url,
                    "search_seed_len": config.search_seed_len,
                    "copy_feedback_ms": config.copy_feedback_ms,
                    "log_file": config.log_file
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.external_url);
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  external_url:     {}", config.external_url);
            println!("  search_seed_len:  {}", config.search_seed_len);
            println!("  copy_feedback_ms: {}", config.copy_feedback_ms);
            println!(
                "  log_file:         {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Print the config file path
pub fn path(config_path: Option<&PathBuf>) -> Result<()> {
    let path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    println!("{}", path.display());
    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config = Config::load_with_cli_override(config_path.map(PathBuf::as_path))
        .context("Failed to load configuration")?;

    match key.as_str() {
        "external_url" => {
            if value.is_empty() {
                bail!("external_url cannot be empty");
            }
            config.external_url = value.clone();
        }
        "search_seed_len" => {
            config.search_seed_len = value
                .parse()
                .context("Invalid value for search_seed_len. Use a whole number.")?;
        }
        "copy_feedback_ms" => {
            config.copy_feedback_ms = value
                .parse()
                .context("Invalid value for copy_feedback_ms. Use a whole number.")?;
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone().into())
            };
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: external_url, search_seed_len, copy_feedback_ms, log_file",
                key
            );
        }
    }

    // Save to the CLI-specified path or default
    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    config
        .save_to_path(&save_path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
