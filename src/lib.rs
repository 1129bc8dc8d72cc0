//! spinquiz - a TUI trivia quiz with a spinning category wheel
//!
//! This library provides the interactive core (wheel selection, the
//! question/answer state machine, view flow) plus the CLI and ratatui
//! front end built on top of it.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{QuizError, Result};
