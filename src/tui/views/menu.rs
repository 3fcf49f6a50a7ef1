//! Main menu
//!
//! Service tiles; only the Digital Will tile can be opened.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::KioskService;
use crate::tui::app::App;

use super::{ACCENT, BRAND};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(4),
        ])
        .split(area);

    let header = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.settings.agency_code),
                Style::default()
                    .fg(Color::White)
                    .bg(BRAND)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                app.settings.kiosk_title.as_str(),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            app.settings.agency_title.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(format!(
            "Welcome to {} Digital Kiosk - Please select a service",
            app.settings.agency_code
        )),
    ];
    frame.render_widget(
        Paragraph::new(header).alignment(ratatui::layout::Alignment::Center),
        rows[0],
    );

    let tile_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4); 4])
        .split(rows[1]);

    for (i, service) in KioskService::ALL.iter().enumerate() {
        let Some(tile_area) = tile_rows.get(i) else {
            break;
        };
        render_tile(frame, *service, i == app.menu_index, *tile_area);
    }
}

fn render_tile(frame: &mut Frame, service: KioskService, selected: bool, area: Rect) {
    let available = service.is_available();

    let border_style = match (selected, available) {
        (true, true) => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Gray),
        (false, true) => Style::default().fg(BRAND),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if available {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::styled(service.title(), text_style)];
    if available {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            " NEW ",
            Style::default().fg(Color::Black).bg(ACCENT),
        ));
    }

    let marker = if selected { "▶ " } else { "  " };
    let lines = vec![
        Line::from([vec![Span::styled(marker, border_style)], title].concat()),
        Line::from(Span::styled(
            format!("  {}", service.subtitle()),
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
