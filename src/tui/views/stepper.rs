//! Progress stepper
//!
//! Agency badge on the left and the eight numbered steps. Finished steps show
//! a check mark, the current step is highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Screen;
use crate::tui::app::App;

use super::{ACCENT, BRAND};

/// Visual state of one step bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

/// State of step `number` (1-based) while `current` is shown
pub fn step_state(number: usize, current: Screen) -> StepState {
    let active = current.step_number();
    if number < active {
        StepState::Done
    } else if number == active {
        StepState::Current
    } else {
        StepState::Upcoming
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.wizard.screen();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.settings.agency_code),
            Style::default()
                .fg(Color::White)
                .bg(BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    for number in 1..=Screen::STEP_COUNT {
        let (text, style) = match step_state(number, current) {
            StepState::Done => ("✓".to_string(), Style::default().fg(Color::Black).bg(ACCENT)),
            StepState::Current => (
                number.to_string(),
                Style::default()
                    .fg(BRAND)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            StepState::Upcoming => (number.to_string(), Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(format!(" {} ", text), style));
        if number < Screen::STEP_COUNT {
            let connector = if number < current.step_number() { "━━" } else { "──" };
            spans.push(Span::styled(connector, Style::default().fg(Color::DarkGray)));
        }
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        current.title(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(BRAND));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
