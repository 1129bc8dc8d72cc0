//! Main TUI application state and logic
//!
//! The app owns the two deferred timers of the flow: the spin duration
//! (wheel animation) and the reveal-to-quiz switch delay. Both are
//! `Instant` deadlines checked on ticks and taken when they fire, so each
//! fires at most once and a restart or quit discards them safely.

use std::io::{self, Stdout};
use std::process::Command;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use ratatui::Terminal;
use tracing::info;

use crate::core::config::Config;
use crate::core::flow::{FlowController, Mode};
use crate::core::question::QuestionBank;
use crate::core::quiz::QuizSession;
use crate::core::wheel::Wheel;
use crate::error::{QuizError, Result};
use crate::tui::event::{is_quit_key, is_spin_key, AppEvent, EventHandler};
use crate::tui::ui;

/// Tick rate driving the wheel animation and timers
const TICK_RATE: Duration = Duration::from_millis(50);

/// Current screen in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Wheel,
    Quiz,
}

/// Main application state
pub struct App {
    /// Whether the app keeps running
    pub running: bool,
    /// Active screen
    pub screen: Screen,
    /// The loaded question set
    pub bank: QuestionBank,
    /// The category wheel
    pub wheel: Wheel,
    /// View flow controller (Selecting/Answering)
    pub flow: FlowController,
    /// The quiz presenter for the active question
    pub session: Option<QuizSession>,
    /// Cursor over the answer options, pre-answer
    pub quiz_cursor: usize,
    /// One-line status shown in the footer
    pub status_message: Option<String>,
    /// Whether the help popup is open
    pub show_help: bool,
    /// Tick counter for spinner frames
    pub tick_counter: u64,

    rng: StdRng,
    spin_duration: Duration,
    reveal_delay: Duration,
    /// When the in-flight spin started; `None` when the wheel is idle
    spin_started: Option<Instant>,
    /// When to switch from the wheel to the quiz view
    switch_at: Option<Instant>,
}

impl App {
    /// Create the app for a validated question bank
    pub fn new(bank: QuestionBank, config: &Config) -> Self {
        let wheel = Wheel::new(bank.categories());
        Self {
            running: true,
            screen: Screen::Wheel,
            bank,
            wheel,
            flow: FlowController::new(),
            session: None,
            quiz_cursor: 0,
            status_message: None,
            show_help: false,
            tick_counter: 0,
            rng: StdRng::from_entropy(),
            spin_duration: Duration::from_millis(config.spin_duration_ms),
            reveal_delay: Duration::from_millis(config.reveal_delay_ms),
            spin_started: None,
            switch_at: None,
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| QuizError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| QuizError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| QuizError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| QuizError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| QuizError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| QuizError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(TICK_RATE);

        info!(questions = self.bank.len(), "starting the quiz TUI");

        // Main event loop
        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| QuizError::Terminal(e.to_string()))?;

            if let Some(event) = events.next().await {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Resize(_, _) => {
                        // Terminal resize is handled automatically by ratatui
                    }
                    AppEvent::Tick => self.on_tick(),
                }
            }
        }

        Self::restore_terminal(&mut terminal)?;
        Ok(())
    }

    /// Advance the animation and fire any elapsed deadline
    fn on_tick(&mut self) {
        self.tick_counter = self.tick_counter.wrapping_add(1);

        if let Some(started) = self.spin_started {
            let elapsed = started.elapsed();
            let total = self.spin_duration.as_secs_f64();
            let progress = if total > 0.0 {
                elapsed.as_secs_f64() / total
            } else {
                1.0
            };
            self.wheel.set_progress(progress);

            if elapsed >= self.spin_duration {
                self.spin_started = None;
                self.finish_spin();
            }
        }

        if let Some(at) = self.switch_at {
            if Instant::now() >= at {
                self.switch_at = None;
                self.enter_quiz();
            }
        }
    }

    /// Request a spin; ignored while one is already in flight
    pub fn request_spin(&mut self) {
        if self.flow.mode() != Mode::Selecting || self.flow.has_staged() {
            return;
        }
        if self.wheel.spin(&mut self.rng) {
            self.spin_started = Some(Instant::now());
            self.status_message = None;
        }
    }

    /// The spin duration elapsed: reveal the winner and schedule the
    /// view switch
    fn finish_spin(&mut self) {
        let Some(winner) = self.wheel.finish() else {
            return;
        };
        let Some(record) = self.bank.get(winner) else {
            return;
        };

        self.status_message = Some(format!("The wheel stopped on {}!", record.category));
        self.flow.stage(record.clone());
        self.switch_at = Some(Instant::now() + self.reveal_delay);
    }

    /// The switch delay elapsed: hand the staged question to the quiz view
    fn enter_quiz(&mut self) {
        // A restart in the delay window leaves nothing staged.
        if let Some(record) = self.flow.commit() {
            self.session = Some(QuizSession::new(record));
            self.quiz_cursor = 0;
            self.status_message = None;
            self.screen = Screen::Quiz;
        }
    }

    /// Return to the wheel, discarding the session and any pending switch
    pub fn restart(&mut self) {
        self.flow.restart();
        self.session = None;
        self.switch_at = None;
        self.quiz_cursor = 0;
        self.status_message = Some("Spin again!".to_string());
        self.screen = Screen::Wheel;
    }

    /// Handle a key press for the current screen
    fn handle_key_event(&mut self, key: KeyEvent) {
        if is_quit_key(&key) {
            self.running = false;
            return;
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return;
        }
        if self.show_help {
            // Any other key closes the help popup.
            self.show_help = false;
            return;
        }

        match self.screen {
            Screen::Wheel => self.handle_wheel_key(key),
            Screen::Quiz => self.handle_quiz_key(key),
        }
    }

    fn handle_wheel_key(&mut self, key: KeyEvent) {
        if is_spin_key(&key) {
            self.request_spin();
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if session.is_answered() {
            match key.code {
                KeyCode::Char('r') | KeyCode::Enter => self.restart(),
                KeyCode::Char('o') => self.open_reference_link(),
                _ => {}
            }
            return;
        }

        let option_count = session.record().options.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.quiz_cursor = self.quiz_cursor.checked_sub(1).unwrap_or(option_count - 1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.quiz_cursor = (self.quiz_cursor + 1) % option_count;
            }
            KeyCode::Enter => {
                session.select(self.quiz_cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Options are numbered from 1 on screen.
                let index = c as usize - '1' as usize;
                if session.select(index) {
                    self.quiz_cursor = index;
                }
            }
            _ => {}
        }
    }

    /// Open the answered question's authoritative link in the browser
    fn open_reference_link(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if !session.is_answered() {
            return;
        }
        let link = &session.record().link;
        if open_browser(link) {
            self.status_message = Some(format!("Opened {}", link));
        } else {
            self.status_message = Some(format!("Could not open {}", link));
        }
    }
}

/// Open a URL in the default browser (cross-platform)
fn open_browser(url: &str) -> bool {
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn().is_ok()
    }
    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn().is_ok()
    }
    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()
            .is_ok()
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        false
    }
}
