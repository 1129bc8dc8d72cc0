//! Question data model and load-time validation
//!
//! Handles the externally supplied question set:
//! - Deserializing the JSON question format
//! - Validating each record's answer index at load time
//! - Access to the immutable, ordered collection

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{QuizError, Result};

/// Default question set bundled into the binary
const BUNDLED_QUESTIONS: &str = include_str!("../../data/questions.json");

/// A single quiz question with its answer options and feedback content
///
/// Field names follow the JSON question format (`correctIndex` etc.),
/// so existing data files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// Short category label, used as the wheel segment for this record
    pub category: String,
    /// The question prompt
    pub question: String,
    /// Answer options in display order
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct_index: usize,
    /// Explanation shown after answering
    pub explanation: String,
    /// Short citation string (e.g. "Rule 109")
    pub reference: String,
    /// URL of the authoritative source
    pub link: String,
}

impl QuestionRecord {
    /// Check the record invariants: at least two options and a correct
    /// index that points inside `options`.
    pub fn validate(&self) -> Result<()> {
        if self.options.len() < 2 {
            return Err(QuizError::InvalidRecord {
                category: self.category.clone(),
                reason: format!("needs at least 2 options, has {}", self.options.len()),
            });
        }
        if self.correct_index >= self.options.len() {
            return Err(QuizError::InvalidRecord {
                category: self.category.clone(),
                reason: format!(
                    "correctIndex {} is out of range for {} options",
                    self.correct_index,
                    self.options.len()
                ),
            });
        }
        Ok(())
    }
}

/// The immutable, ordered collection of questions loaded at startup
///
/// Every record has passed [`QuestionRecord::validate`]; a bank is never
/// empty. Record order determines wheel segment order.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Parse and validate a question set from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build a bank from already-deserialized records, validating each one
    pub fn from_records(records: Vec<QuestionRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        for record in &records {
            record.validate()?;
        }

        // Duplicate labels are legal (each record is its own segment) but
        // usually indicate a data entry mistake, so call them out.
        let mut seen: Vec<&str> = Vec::with_capacity(records.len());
        for record in &records {
            if seen.contains(&record.category.as_str()) {
                warn!(category = %record.category, "duplicate category label in question set");
            }
            seen.push(&record.category);
        }

        Ok(Self { records })
    }

    /// Load a question set from a file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|_| QuizError::DataFileNotFound(path.to_path_buf()))?;
        Self::from_json(&contents)
    }

    /// The default question set compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_QUESTIONS)
    }

    /// Number of questions (equivalently, wheel segments)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, in display order
    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.records.get(index)
    }

    /// All records in display order
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Category labels in display order, one per record
    pub fn categories(&self) -> Vec<String> {
        self.records.iter().map(|r| r.category.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, options: usize, correct: usize) -> QuestionRecord {
        QuestionRecord {
            category: category.to_string(),
            question: "Q?".to_string(),
            options: (0..options).map(|i| format!("option {}", i)).collect(),
            correct_index: correct,
            explanation: "Because.".to_string(),
            reference: "Rule 1".to_string(),
            link: "https://example.com/rule-1".to_string(),
        }
    }

    #[test]
    fn test_parse_camel_case_json() {
        let json = r#"[{
            "category": "Signs",
            "question": "What does a red octagon mean?",
            "options": ["Stop", "Yield"],
            "correctIndex": 0,
            "explanation": "A red octagon always means stop.",
            "reference": "Rule 10",
            "link": "https://example.com/signs"
        }]"#;
        let bank = QuestionBank::from_json(json).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get(0).unwrap().correct_index, 0);
        assert_eq!(bank.categories(), vec!["Signs".to_string()]);
    }

    #[test]
    fn test_reject_out_of_range_correct_index() {
        let err = QuestionBank::from_records(vec![record("Signs", 3, 3)]).unwrap_err();
        assert!(matches!(err, QuizError::InvalidRecord { .. }));
        assert!(err.to_string().contains("Signs"));
    }

    #[test]
    fn test_reject_too_few_options() {
        let err = QuestionBank::from_records(vec![record("Lights", 1, 0)]).unwrap_err();
        assert!(matches!(err, QuizError::InvalidRecord { .. }));
    }

    #[test]
    fn test_reject_empty_collection() {
        let err = QuestionBank::from_records(vec![]).unwrap_err();
        assert!(matches!(err, QuizError::EmptyQuestionSet));
    }

    #[test]
    fn test_last_option_is_valid_correct_index() {
        let bank = QuestionBank::from_records(vec![record("Motorway", 4, 3)]).unwrap();
        assert_eq!(bank.get(0).unwrap().correct_index, 3);
    }

    #[test]
    fn test_duplicate_categories_still_load() {
        let bank =
            QuestionBank::from_records(vec![record("Signs", 2, 0), record("Signs", 2, 1)]).unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_bundled_set_is_valid() {
        let bank = QuestionBank::bundled().unwrap();
        assert!(!bank.is_empty());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = QuestionBank::load(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(matches!(err, QuizError::DataFileNotFound(_)));
    }
}
