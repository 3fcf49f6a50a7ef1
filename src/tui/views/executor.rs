//! Digital executor selection

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::ExecutorChoice;
use crate::tui::app::App;

use super::{continue_button, screen_block, ACCENT, BRAND};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = screen_block("Select Digital Executor");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(
            "Choose who will be responsible for unlocking and executing your will upon confirmed death.",
        )
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let selected = app.wizard.executor();
    for (i, choice) in ExecutorChoice::ALL.iter().enumerate() {
        render_card(frame, *choice, i + 1, selected == Some(*choice), chunks[i + 1]);
    }

    frame.render_widget(
        Paragraph::new(continue_button("Confirm Selection", app)).alignment(Alignment::Center),
        chunks[5],
    );
}

fn render_card(frame: &mut Frame, choice: ExecutorChoice, key: usize, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![
        Span::styled(
            format!(" [{}] {} ", key, choice.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if choice.is_recommended() {
        title.push(Span::styled(
            " Recommended ",
            Style::default().fg(Color::Black).bg(ACCENT),
        ));
    }
    if selected {
        title.push(Span::styled(" ✓ ", Style::default().fg(Color::Green)));
    }

    let mut lines = vec![Line::from(choice.summary())];
    lines.extend(
        choice
            .details()
            .iter()
            .map(|d| Line::from(Span::styled(format!("• {}", d), Style::default().fg(Color::Gray)))),
    );

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}
