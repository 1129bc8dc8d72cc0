//! Core functionality for spinquiz
//!
//! This module contains the interactive logic behind both views:
//! - Question data model and load-time validation
//! - The spinning category wheel (random selection + animation targeting)
//! - The question/answer state machine
//! - The two-mode view flow controller
//! - Application configuration

pub mod config;
pub mod flow;
pub mod question;
pub mod quiz;
pub mod wheel;

pub use config::Config;
pub use flow::{FlowController, Mode};
pub use question::{QuestionBank, QuestionRecord};
pub use quiz::{OptionStatus, QuizSession, QuizView};
pub use wheel::{Wheel, WheelView};
