//! Question file validation CLI command handler
//!
//! Runs the same load-time checks the TUI applies, but reports every
//! violation instead of stopping at the first one.

use std::fs;
use std::path::Path;

use crate::cli::commands::ValidateArgs;
use crate::core::config::Config;
use crate::core::question::QuestionRecord;
use crate::error::{QuizError, Result};

/// Handle the validate command
pub fn handle_validate(args: ValidateArgs) -> Result<()> {
    let configured = Config::load()?.data_file;

    let records = match args.file.or(configured) {
        Some(path) => {
            println!("Validating {}", path.display());
            read_records(&path)?
        }
        None => {
            println!("Validating the bundled question set");
            crate::core::question::QuestionBank::bundled()?
                .records()
                .to_vec()
        }
    };

    if records.is_empty() {
        return Err(QuizError::EmptyQuestionSet);
    }

    let mut failures = 0usize;
    for (index, record) in records.iter().enumerate() {
        match record.validate() {
            Ok(()) => println!("  ok  [{}] {}", index, record.category),
            Err(e) => {
                failures += 1;
                println!("  BAD [{}] {}", index, first_line(&e.to_string()));
            }
        }
    }

    if failures > 0 {
        return Err(QuizError::InvalidInput(format!(
            "{} of {} questions failed validation.",
            failures,
            records.len()
        )));
    }

    println!("All {} questions are valid.", records.len());
    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<QuestionRecord>> {
    let contents =
        fs::read_to_string(path).map_err(|_| QuizError::DataFileNotFound(path.to_path_buf()))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Error messages carry multi-line hints; the per-record report only
/// wants the summary line.
fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or(message)
}
