//! TUI Views module
//!
//! One view per wizard screen, plus the progress stepper and the status bar.

pub mod assets;
pub mod biometric;
pub mod documents;
pub mod executor;
pub mod menu;
pub mod religion;
pub mod status_bar;
pub mod stepper;
pub mod success;
pub mod welcome;
pub mod witnesses;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Screen;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Agency blue used for headings and selected cards
pub const BRAND: Color = Color::Blue;

/// Accent used for completed steps and pending hardware
pub const ACCENT: Color = Color::Yellow;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let screen = app.wizard.screen();
    let layout = AppLayout::new(frame.area(), screen.shows_stepper());

    if screen.shows_stepper() {
        stepper::render(frame, app, layout.header);
    }

    match screen {
        Screen::Menu => menu::render(frame, app, layout.main),
        Screen::Welcome => welcome::render(frame, app, layout.main),
        Screen::Biometric => biometric::render(frame, app, layout.main),
        Screen::Religion => religion::render(frame, app, layout.main),
        Screen::Assets => assets::render(frame, app, layout.main),
        Screen::Documents => documents::render(frame, app, layout.main),
        Screen::Executor => executor::render(frame, app, layout.main),
        Screen::Witnesses => witnesses::render(frame, app, layout.main),
        Screen::Success => success::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let widget = NotificationWidget::new(notification);
        let width = 44;
        let height = widget.height_for(width);
        frame.render_widget(widget, toast_rect(width, height, frame.area()));
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmQuit => dialogs::confirm::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Bordered panel titled with the screen heading
pub fn screen_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(BRAND).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND))
}

/// Draw centered lines inside a screen panel
pub fn render_centered(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let paragraph = Paragraph::new(lines)
        .block(screen_block(title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// The screen's forward control, greyed out with its reason when blocked
pub fn continue_button(label: &str, app: &App) -> Vec<Line<'static>> {
    match app.wizard.blocked_reason() {
        None => vec![Line::from(Span::styled(
            format!("[ Enter ]  {}", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))],
        Some(reason) => vec![
            Line::from(Span::styled(
                format!("[ Enter ]  {}", label),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(reason, Style::default().fg(ACCENT))),
        ],
    }
}

/// A line with a bold lead-in followed by plain text
pub fn labelled(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.into()),
    ])
}

/// Blinking on/off state for decorative animation
pub fn blink(frame: usize) -> bool {
    frame % 2 == 0
}
