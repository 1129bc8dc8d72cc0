//! Event handling for TUI

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tokio::time::interval;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event driving animations and timers
    Tick,
}

/// Event handler for the TUI
///
/// Ticks arrive at a fixed rate regardless of input, so pending timers
/// (spin end, view switch) fire even when the user touches nothing.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    /// Handle to the event task for cleanup
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);

        // Spawn event polling task
        let task = tokio::spawn(async move {
            let mut tick_interval = interval(tick_rate);

            loop {
                tokio::select! {
                    _ = tick_interval.tick() => {
                        if tx.send(AppEvent::Tick).await.is_err() {
                            break;
                        }
                    }
                    ready = tokio::task::spawn_blocking(|| {
                        event::poll(Duration::from_millis(20)).unwrap_or(false)
                    }) => {
                        if !ready.unwrap_or(false) {
                            continue;
                        }
                        let Ok(evt) = event::read() else { continue };
                        let app_event = match evt {
                            CrosstermEvent::Key(key) => AppEvent::Key(key),
                            CrosstermEvent::Resize(w, h) => AppEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(app_event).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, _task: task }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Helper to check for quit key combinations
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Helper to check for the spin request keys (wheel view)
pub fn is_spin_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_spin_keys() {
        assert!(is_spin_key(&key(KeyCode::Char('s'), KeyModifiers::NONE)));
        assert!(is_spin_key(&key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(is_spin_key(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_spin_key(&key(KeyCode::Char('x'), KeyModifiers::NONE)));
    }
}
