//! Main UI renderer
//!
//! Renders the declarative view models emitted by the core: the wheel
//! screen (segments, pointer, spin state) and the quiz screen (question,
//! options with statuses, feedback block). No behavioral state lives here.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::core::quiz::{OptionStatus, QuizView};
use crate::core::wheel::WheelView;
use crate::tui::app::{App, Screen};
use crate::tui::theme::Theme;

/// Spinner frames shown while the wheel is in flight
const SPINNER_FRAMES: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Render the whole frame for the current app state
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Wheel => render_wheel_screen(frame, app),
        Screen::Quiz => render_quiz_screen(frame, app),
    }

    if app.show_help {
        render_help_popup(frame, app);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wheel screen
// ─────────────────────────────────────────────────────────────────────────────

fn render_wheel_screen(frame: &mut Frame, app: &App) {
    let view = app.wheel.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_wheel_header(frame, app, &view, chunks[0]);
    render_segments(frame, &view, chunks[1]);
    render_footer(frame, app, wheel_hints(app), chunks[2]);
}

fn render_wheel_header(frame: &mut Frame, app: &App, view: &WheelView, area: Rect) {
    let title = if view.spinning {
        let frame_char = SPINNER_FRAMES[app.tick_counter as usize % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled("Spinning ", Theme::header()),
            Span::styled(frame_char.to_string(), Theme::header()),
            Span::styled(
                format!("  {:>6.1}°", view.rotation.rem_euclid(360.0)),
                Theme::muted(),
            ),
        ])
    } else {
        Line::from(Span::styled("Spin the wheel to pick a category!", Theme::header()))
    };

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" spinquiz "));
    frame.render_widget(header, area);
}

/// The wheel as a vertical strip of segments with a fixed pointer.
///
/// The segment under the pointer is the one the rotation currently puts
/// at 12 o'clock, so the highlight races around the strip as the wheel
/// spins and decelerates onto the winner.
fn render_segments(frame: &mut Frame, view: &WheelView, area: Rect) {
    let items: Vec<ListItem> = view
        .segments
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let under_pointer = i == view.pointer_index;
            let marker = if under_pointer { "▶ " } else { "  " };
            let style = if under_pointer {
                Theme::selected()
            } else {
                Style::default().fg(Theme::segment_color(i))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Theme::header()),
                Span::styled(format!(" {} ", label), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" categories "),
    );
    frame.render_widget(list, area);
}

fn wheel_hints(app: &App) -> &'static str {
    if app.wheel.is_spinning() {
        "spinning…  |  ? help  |  q quit"
    } else {
        "s/space/enter spin  |  ? help  |  q quit"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quiz screen
// ─────────────────────────────────────────────────────────────────────────────

fn render_quiz_screen(frame: &mut Frame, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let view = session.view();

    let feedback_height = if view.feedback.is_some() { 8 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(feedback_height),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_question(frame, &view, chunks[0]);
    render_options(frame, app, &view, chunks[1]);
    if view.feedback.is_some() {
        render_feedback(frame, &view, chunks[2]);
    }
    render_footer(frame, app, quiz_hints(&view), chunks[3]);
}

fn render_question(frame: &mut Frame, view: &QuizView, area: Rect) {
    let question = Paragraph::new(view.question.clone())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.category))
                .title_style(Theme::header()),
        );
    frame.render_widget(question, area);
}

fn render_options(frame: &mut Frame, app: &App, view: &QuizView, area: Rect) {
    let answered = view.feedback.is_some();

    let items: Vec<ListItem> = view
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let (marker, style) = match option.status {
                OptionStatus::Neutral => {
                    if !answered && i == app.quiz_cursor {
                        ("› ", Theme::selected())
                    } else {
                        ("  ", Theme::normal())
                    }
                }
                OptionStatus::Correct => ("✓ ", Theme::correct()),
                OptionStatus::Incorrect => ("✗ ", Theme::incorrect()),
                OptionStatus::Dimmed => ("  ", Theme::muted()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{}. {}", i + 1, option.label), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" options "));
    frame.render_widget(list, area);
}

fn render_feedback(frame: &mut Frame, view: &QuizView, area: Rect) {
    let Some(feedback) = view.feedback.as_ref() else {
        return;
    };

    let (verdict, style) = if feedback.correct {
        ("Correct!", Theme::correct())
    } else {
        ("Incorrect", Theme::incorrect())
    };

    let lines = vec![
        Line::from(Span::styled(verdict, style)),
        Line::from(""),
        Line::from(feedback.explanation.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Reference: ", Theme::muted()),
            Span::raw(feedback.reference.clone()),
            Span::styled("   o opens ", Theme::muted()),
            Span::styled(feedback.link.clone(), Theme::muted()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" feedback "));
    frame.render_widget(paragraph, area);
}

fn quiz_hints(view: &QuizView) -> &'static str {
    if view.restart_available {
        "r/enter spin again  |  o open reference  |  q quit"
    } else {
        "↑/↓ move  |  enter/1-9 answer  |  q quit"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared chrome
// ─────────────────────────────────────────────────────────────────────────────

fn render_footer(frame: &mut Frame, app: &App, hints: &str, area: Rect) {
    let line = match app.status_message.as_ref() {
        Some(status) => Line::from(vec![
            Span::styled(status.clone(), Theme::header()),
            Span::styled(format!("   {}", hints), Theme::muted()),
        ]),
        None => Line::from(Span::styled(hints, Theme::muted())),
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_help_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let lines = match app.screen {
        Screen::Wheel => vec![
            Line::from(Span::styled("Wheel", Theme::header())),
            Line::from(""),
            Line::from("  s / space / enter   spin the wheel"),
            Line::from("  ?                   toggle this help"),
            Line::from("  q / ctrl-c          quit"),
        ],
        Screen::Quiz => vec![
            Line::from(Span::styled("Quiz", Theme::header())),
            Line::from(""),
            Line::from("  ↑/↓ or j/k          move between options"),
            Line::from("  enter or 1-9        lock in an answer"),
            Line::from("  r / enter           spin again (after answering)"),
            Line::from("  o                   open the reference link"),
            Line::from("  q / ctrl-c          quit"),
        ],
    };

    let popup = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" help "));
    frame.render_widget(popup, area);
}

/// Centered rectangle occupying the given percentages of `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
