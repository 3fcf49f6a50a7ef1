//! Help dialog
//!
//! Lists the keys of the current screen, read from the keybinding table

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Screen;
use crate::tui::app::App;
use crate::tui::keybindings::{bindings_in, format_keybinding, KeyContext};
use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let lines = help_lines(app);
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_fixed(56, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let screen = app.wizard.screen();
    let sections = [
        (screen.title(), KeyContext::for_screen(screen)),
        ("Editing", KeyContext::Editing),
        ("Global Keys", KeyContext::Global),
    ];

    let mut lines = Vec::new();
    for (heading, context) in sections {
        if context == KeyContext::Editing && screen != Screen::Assets {
            continue;
        }
        lines.push(Line::from(Span::styled(
            heading,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )));
        lines.extend(
            bindings_in(context).map(|kb| key_line(&format_keybinding(kb), kb.description)),
        );
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
