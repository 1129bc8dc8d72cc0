//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

/// Wheel segment palette, cycled when there are more segments than colors
pub const SEGMENT_COLORS: [Color; 10] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::LightMagenta,
    Color::LightBlue,
    Color::Cyan,
    Color::LightRed,
    Color::Gray,
];

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color
    pub const PRIMARY: Color = Color::Cyan;

    /// Correct-answer color
    pub const CORRECT: Color = Color::Green;

    /// Incorrect-answer color
    pub const INCORRECT: Color = Color::Red;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Color for the segment at `index`
    pub fn segment_color(index: usize) -> Color {
        SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
    }

    /// Header style
    pub fn header() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Segment or option currently under the cursor/pointer
    pub fn selected() -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// Correct option style
    pub fn correct() -> Style {
        Style::default()
            .fg(Self::CORRECT)
            .add_modifier(Modifier::BOLD)
    }

    /// Incorrect option style
    pub fn incorrect() -> Style {
        Style::default()
            .fg(Self::INCORRECT)
            .add_modifier(Modifier::BOLD)
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }
}
