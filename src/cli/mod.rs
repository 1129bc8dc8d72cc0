//! CLI module for spinquiz
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod validate;

pub use commands::{Cli, Commands};
