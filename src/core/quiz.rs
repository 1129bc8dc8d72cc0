//! Question/answer state machine
//!
//! A [`QuizSession`] presents exactly one question. The first valid answer
//! selection is final: the session moves to an answered state that only a
//! full replacement (restart) leaves. Repeat selections and out-of-range
//! indices are silent no-ops, mirroring a feedback UI that disables input
//! once answered.

use tracing::debug;

use crate::core::question::QuestionRecord;

/// Visual status of one answer option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStatus {
    /// Selectable, no answer given yet
    Neutral,
    /// This is the correct answer (shown once answered)
    Correct,
    /// This was selected and is wrong
    Incorrect,
    /// Not selected, not correct; de-emphasized once answered
    Dimmed,
}

/// One option in the quiz view model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub status: OptionStatus,
}

/// Feedback block, present only in the answered state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub correct: bool,
    pub explanation: String,
    pub reference: String,
    pub link: String,
}

/// Declarative view of the quiz screen for the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub category: String,
    pub question: String,
    pub options: Vec<OptionView>,
    /// `Some` iff the session is answered
    pub feedback: Option<FeedbackView>,
    /// The restart action is only offered once answered
    pub restart_available: bool,
}

/// A single question being answered
#[derive(Debug, Clone)]
pub struct QuizSession {
    record: QuestionRecord,
    selected: Option<usize>,
}

impl QuizSession {
    /// Start a session for one validated question record
    pub fn new(record: QuestionRecord) -> Self {
        Self {
            record,
            selected: None,
        }
    }

    /// Record an answer. The first call with a valid index wins and
    /// returns `true`; anything after that (or out of range) is a no-op
    /// returning `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if self.selected.is_some() {
            debug!(index, "answer selection ignored, already answered");
            return false;
        }
        if index >= self.record.options.len() {
            debug!(index, "answer selection ignored, out of range");
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Whether an answer has been recorded
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// The recorded answer, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// `None` until answered, then whether the answer was correct
    pub fn is_correct(&self) -> Option<bool> {
        self.selected.map(|s| s == self.record.correct_index)
    }

    /// The question record this session presents
    pub fn record(&self) -> &QuestionRecord {
        &self.record
    }

    /// Status of option `index` for the current state
    pub fn option_status(&self, index: usize) -> OptionStatus {
        match self.selected {
            None => OptionStatus::Neutral,
            Some(selected) => {
                if index == self.record.correct_index {
                    OptionStatus::Correct
                } else if index == selected {
                    OptionStatus::Incorrect
                } else {
                    OptionStatus::Dimmed
                }
            }
        }
    }

    /// Emit the declarative view model for the rendering layer
    pub fn view(&self) -> QuizView {
        let options = self
            .record
            .options
            .iter()
            .enumerate()
            .map(|(i, label)| OptionView {
                label: label.clone(),
                status: self.option_status(i),
            })
            .collect();

        let feedback = self.is_correct().map(|correct| FeedbackView {
            correct,
            explanation: self.record.explanation.clone(),
            reference: self.record.reference.clone(),
            link: self.record.link.clone(),
        });

        QuizView {
            category: self.record.category.clone(),
            question: self.record.question.clone(),
            options,
            restart_available: feedback.is_some(),
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QuestionRecord {
        QuestionRecord {
            category: "Signs".to_string(),
            question: "What does a circular sign with a red border mean?".to_string(),
            options: vec![
                "Advance warning".to_string(),
                "Prohibition".to_string(),
                "Information".to_string(),
            ],
            correct_index: 1,
            explanation: "Circular signs with red borders tell you what you must not do."
                .to_string(),
            reference: "Rule 109".to_string(),
            link: "https://example.com/signs".to_string(),
        }
    }

    #[test]
    fn test_first_selection_wins() {
        let mut session = QuizSession::new(record());
        assert!(session.select(2));
        assert_eq!(session.selected(), Some(2));

        // Any later call leaves the first answer in place.
        assert!(!session.select(1));
        assert!(!session.select(2));
        assert_eq!(session.selected(), Some(2));
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let mut session = QuizSession::new(record());
        assert!(!session.select(3));
        assert!(!session.is_answered());
        assert!(session.select(0));
    }

    #[test]
    fn test_correctness_for_every_index() {
        for i in 0..3 {
            let mut session = QuizSession::new(record());
            session.select(i);
            assert_eq!(session.is_correct(), Some(i == 1));
        }
    }

    #[test]
    fn test_unanswered_state() {
        let session = QuizSession::new(record());
        assert!(!session.is_answered());
        assert_eq!(session.is_correct(), None);
        for i in 0..3 {
            assert_eq!(session.option_status(i), OptionStatus::Neutral);
        }

        let view = session.view();
        assert!(view.feedback.is_none());
        assert!(!view.restart_available);
    }

    #[test]
    fn test_answered_statuses_wrong_answer() {
        let mut session = QuizSession::new(record());
        session.select(0);

        assert_eq!(session.option_status(0), OptionStatus::Incorrect);
        assert_eq!(session.option_status(1), OptionStatus::Correct);
        assert_eq!(session.option_status(2), OptionStatus::Dimmed);
    }

    #[test]
    fn test_answered_statuses_right_answer() {
        let mut session = QuizSession::new(record());
        session.select(1);

        assert_eq!(session.option_status(0), OptionStatus::Dimmed);
        assert_eq!(session.option_status(1), OptionStatus::Correct);
        assert_eq!(session.option_status(2), OptionStatus::Dimmed);
    }

    #[test]
    fn test_feedback_contents() {
        let mut session = QuizSession::new(record());
        session.select(1);

        let view = session.view();
        let feedback = view.feedback.expect("answered session has feedback");
        assert!(feedback.correct);
        assert_eq!(feedback.reference, "Rule 109");
        assert_eq!(feedback.link, "https://example.com/signs");
        assert!(view.restart_available);
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut session = QuizSession::new(record());
        assert_eq!(session.view(), session.view());

        session.select(0);
        assert_eq!(session.view(), session.view());
    }
}
