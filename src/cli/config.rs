//! Configuration CLI command handlers

use std::path::PathBuf;

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::Config;
use crate::error::{ForgeError, Result};
use crate::scaffold::Framework;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, value),
        ConfigCommand::Get { key } => handle_get(key),
        ConfigCommand::Remove { key } => handle_remove(key),
    }
}

/// Parse a framework value for `config set framework`
fn parse_framework(value: &str) -> Result<Framework> {
    Framework::from_key(value).ok_or_else(|| {
        ForgeError::InvalidInput(format!(
            "Invalid framework '{}'. Available frameworks: {}",
            value,
            Framework::ALL
                .iter()
                .map(|f| f.key())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: String) -> Result<()> {
    let mut config = Config::load()?;

    let message = match key {
        ConfigKey::OutputDir => {
            if value.trim().is_empty() {
                return Err(ForgeError::InvalidInput(
                    "Output directory cannot be empty".to_string(),
                ));
            }
            let dir = PathBuf::from(value);
            let message = format!("Output directory set to: {}", dir.display());
            config.output_dir = Some(dir);
            message
        }
        ConfigKey::Framework => {
            let framework = parse_framework(&value)?;
            config.default_framework = framework;
            format!("Default framework set to: {}", framework.display_name())
        }
    };

    config.save()?;
    println!("{}", message);
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey) -> Result<()> {
    let config = Config::load()?;

    match key {
        ConfigKey::OutputDir => match &config.output_dir {
            Some(dir) => println!("Output directory: {}", dir.display()),
            None => println!("Output directory: Not configured (current directory)"),
        },
        ConfigKey::Framework => {
            println!(
                "Default framework: {} ({})",
                config.default_framework.display_name(),
                config.default_framework.key()
            );
        }
    }
    Ok(())
}

/// Handle removing a configuration value
fn handle_remove(key: ConfigKey) -> Result<()> {
    let mut config = Config::load()?;

    let message = match key {
        ConfigKey::OutputDir => {
            config.output_dir = None;
            "Output directory reset to the current directory.".to_string()
        }
        ConfigKey::Framework => {
            config.default_framework = Framework::default();
            format!(
                "Default framework reset to: {}",
                Framework::default().display_name()
            )
        }
    };

    config.save()?;
    println!("{}", message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_framework() {
        assert_eq!(parse_framework("react").unwrap(), Framework::React);
        assert_eq!(parse_framework(" NEXTJS ").unwrap(), Framework::Nextjs);

        let err = parse_framework("svelte").unwrap_err().to_string();
        assert!(err.contains("Available frameworks: nextjs, react"));
    }
}
