//! Configuration CLI command handlers

use std::path::PathBuf;

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::Config;
use crate::error::{QuizError, Result};

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Get { key } => handle_get(key),
        ConfigCommand::Set { key, value } => handle_set(key, value),
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey) -> Result<()> {
    let config = Config::load()?;
    match key {
        ConfigKey::SpinDurationMs => {
            println!("spin-duration-ms: {}", config.spin_duration_ms);
        }
        ConfigKey::RevealDelayMs => {
            println!("reveal-delay-ms: {}", config.reveal_delay_ms);
        }
        ConfigKey::DataFile => match config.data_file {
            Some(path) => println!("data-file: {}", path.display()),
            None => println!("data-file: Not configured (using the bundled set)"),
        },
    }
    Ok(())
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: String) -> Result<()> {
    let mut config = Config::load()?;
    match key {
        ConfigKey::SpinDurationMs => {
            config.spin_duration_ms = parse_millis(&value, "spin-duration-ms")?;
            config.save()?;
            println!("Spin duration set to {} ms", config.spin_duration_ms);
        }
        ConfigKey::RevealDelayMs => {
            config.reveal_delay_ms = parse_millis(&value, "reveal-delay-ms")?;
            config.save()?;
            println!("Reveal delay set to {} ms", config.reveal_delay_ms);
        }
        ConfigKey::DataFile => {
            let path = PathBuf::from(&value);
            if !path.is_file() {
                return Err(QuizError::DataFileNotFound(path));
            }
            config.data_file = Some(path);
            config.save()?;
            println!("Default question file set to {}", value);
        }
    }
    Ok(())
}

/// Parse a millisecond value from user input
fn parse_millis(value: &str, key: &str) -> Result<u64> {
    value.parse().map_err(|_| {
        QuizError::InvalidInput(format!(
            "Invalid value '{}' for {}. Expected a number of milliseconds.",
            value, key
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("4000", "spin-duration-ms").unwrap(), 4000);
        assert_eq!(parse_millis("0", "reveal-delay-ms").unwrap(), 0);
        assert!(parse_millis("fast", "spin-duration-ms").is_err());
        assert!(parse_millis("-1", "spin-duration-ms").is_err());
    }
}
