//! CLI command definitions using clap
//!
//! Defines the command structure for the `sq` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// spinquiz - a trivia quiz with a spinning category wheel
///
/// A terminal quiz: spin the wheel, get a category, answer the question.
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "sq", version, about, long_about = None)]
pub struct Cli {
    /// Question file to use instead of the configured or bundled set
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a question file against the data invariants
    Validate(ValidateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Validate Command
// ─────────────────────────────────────────────────────────────────────────────

/// Question file validation
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// File to validate (defaults to the configured question file,
    /// or the bundled set)
    pub file: Option<PathBuf>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show a configuration value
    Get {
        /// Which setting to show
        key: ConfigKey,
    },
    /// Change a configuration value
    Set {
        /// Which setting to change
        key: ConfigKey,
        /// New value
        value: String,
    },
    /// Print the path of the configuration file
    Path,
}

/// Settings that can be read and written from the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Spin animation duration in milliseconds
    SpinDurationMs,
    /// Delay between wheel reveal and quiz view in milliseconds
    RevealDelayMs,
    /// Default question file path
    DataFile,
}
