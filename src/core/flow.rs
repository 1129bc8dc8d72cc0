//! Root view flow: Selecting <-> Answering
//!
//! The controller owns which of the two views is active and the question
//! handed over by the wheel. A revealed question is staged first, because
//! the view switch is deferred briefly so the user can register where the
//! wheel stopped; the timer itself belongs to the TUI layer and may be
//! zero without changing any contract here.

use tracing::debug;

use crate::core::question::QuestionRecord;

/// Which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Wheel view, waiting for (or running) a spin
    #[default]
    Selecting,
    /// Quiz view, presenting the selected question
    Answering,
}

/// Two-state view controller wiring the wheel's output into the quiz
#[derive(Debug, Clone, Default)]
pub struct FlowController {
    mode: Mode,
    staged: Option<QuestionRecord>,
    active: Option<QuestionRecord>,
}

impl FlowController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The question being answered; `Some` iff mode is Answering
    pub fn active(&self) -> Option<&QuestionRecord> {
        self.active.as_ref()
    }

    /// Hand over the question revealed by the wheel. The mode stays
    /// Selecting until [`FlowController::commit`] runs; only meaningful
    /// while Selecting.
    pub fn stage(&mut self, record: QuestionRecord) {
        if self.mode != Mode::Selecting {
            debug!("reveal ignored outside the selecting mode");
            return;
        }
        debug!(category = %record.category, "question staged for the quiz view");
        self.staged = Some(record);
    }

    /// Whether a revealed question is waiting for the view switch
    pub fn has_staged(&self) -> bool {
        self.staged.is_some()
    }

    /// Switch to the quiz view with the staged question. Returns the
    /// question so the caller can build the presenter; `None` (and no
    /// state change) when nothing is staged, so a stale switch timer is
    /// harmless.
    pub fn commit(&mut self) -> Option<QuestionRecord> {
        let record = self.staged.take()?;
        self.mode = Mode::Answering;
        self.active = Some(record.clone());
        Some(record)
    }

    /// Return to the wheel view, clearing the active question. A no-op
    /// while already Selecting.
    pub fn restart(&mut self) {
        if self.mode == Mode::Answering {
            debug!("restart requested, returning to the wheel");
        }
        self.mode = Mode::Selecting;
        self.active = None;
        self.staged = None;
    }
}
