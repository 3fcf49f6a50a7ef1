//! Witness verification screen
//!
//! Two witness cards side by side, each with a two-step checklist. The
//! focused card receives `i` and `f`.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{WitnessCheck, WitnessSlot};
use crate::tui::app::App;

use super::{continue_button, screen_block, ACCENT, BRAND};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = screen_block("Witness Authentication");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Two (2) Witnesses are required to validate this Will")
            .alignment(Alignment::Center),
        chunks[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for slot in WitnessSlot::ALL {
        render_card(
            frame,
            slot,
            app.wizard.witness(slot),
            slot == app.witness_focus,
            cards[slot.index()],
        );
    }

    frame.render_widget(
        Paragraph::new(continue_button("Complete Registration", app)).alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_card(frame: &mut Frame, slot: WitnessSlot, check: &WitnessCheck, focused: bool, area: Rect) {
    let done = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let action = Style::default().fg(Color::Cyan);
    let waiting = Style::default().fg(Color::DarkGray);

    let step_one = if check.card_inserted {
        Span::styled("✓ IC Inserted", done)
    } else {
        Span::styled("[i] Insert IC", action)
    };
    let step_two = if check.verified {
        Span::styled("✓ Fingerprint Verified", done)
    } else if check.can_scan() {
        Span::styled("[f] Scan Fingerprint", action)
    } else {
        Span::styled("Complete Step 1 first", waiting)
    };

    let lines = vec![
        Line::from(vec![Span::raw("Step 1: "), step_one]),
        Line::from(""),
        Line::from(vec![Span::raw("Step 2: "), step_two]),
    ];

    let border_style = match (focused, check.verified) {
        (_, true) => Style::default().fg(Color::Green),
        (true, false) => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(BRAND),
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", slot))
            .borders(Borders::ALL)
            .border_type(if focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}
