//! Status bar view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};
use crate::tui::keybindings::{hints_for, KeyContext};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let context = match app.input_mode {
        InputMode::Editing => KeyContext::Editing,
        InputMode::Normal => KeyContext::for_screen(app.wizard.screen()),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(area);

    let hints = hints_for(context).join("  ");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", hints),
            Style::default().fg(Color::White),
        )))
        .style(Style::default().bg(Color::DarkGray)),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(format!("{} ", app.wizard.session()))
            .alignment(ratatui::layout::Alignment::Right)
            .style(Style::default().fg(Color::Gray).bg(Color::DarkGray)),
        chunks[1],
    );
}
