//! Asset distribution screen
//!
//! Shows the allocation meter against the religion cap and one editable row
//! per beneficiary. The inline editor, when open, replaces the field it edits.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{Percent, Religion};
use crate::services::Allocation;
use crate::tui::app::{App, EditField};

use super::{continue_button, screen_block, ACCENT, BRAND};

const FARAID_NOTICE: &str = "Under Islamic law (Faraid), 2/3 of your assets are automatically \
allocated to your Quranic heirs. You can only distribute 33.3% (1/3) of your total assets through Wasiat.";

/// Width of the allocation meter bar
const METER_WIDTH: usize = 30;

/// Allocation meter as a block bar: total against the cap
pub fn meter_bar(allocation: &Allocation, width: usize) -> String {
    let cap = allocation.cap().tenths();
    let total = allocation.total().tenths().clamp(0, cap.max(0));
    if cap <= 0 {
        return "░".repeat(width);
    }

    let filled = ((total * width as i64 + cap / 2) / cap) as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// First beneficiary row drawn so the selected row stays on screen
pub fn scroll_offset(selected: usize, count: usize, visible: usize) -> usize {
    if visible == 0 || count <= visible {
        return 0;
    }
    selected
        .min(count - 1)
        .saturating_sub(visible - 1)
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = screen_block("Asset Distribution");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let religion = app.wizard.religion();
    let allocation = app.wizard.allocation();
    let info_height = if religion == Some(Religion::Muslim) { 5 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(info_height),
            Constraint::Length(1), // heading
            Constraint::Length(1), // meter
            Constraint::Length(1), // remaining
            Constraint::Length(1),
            Constraint::Min(2), // rows
            Constraint::Length(1), // add
            Constraint::Length(1),
            Constraint::Length(2), // continue
        ])
        .split(inner);

    if info_height > 0 {
        let notice = Paragraph::new(FARAID_NOTICE)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Wasiat 1/3 Rule ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            );
        frame.render_widget(notice, chunks[0]);
    }

    let heading = religion
        .map(|r| r.allocation_heading())
        .unwrap_or("Total Assets Allocation");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        chunks[1],
    );

    let meter_color = if allocation.is_balanced() {
        Color::Green
    } else {
        BRAND
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                meter_bar(allocation, METER_WIDTH),
                Style::default().fg(meter_color),
            ),
            Span::raw(format!("  {} / {}", allocation.total(), allocation.cap())),
        ])),
        chunks[2],
    );

    let remaining = allocation.remaining().clamp_to(Percent::zero(), allocation.cap());
    frame.render_widget(
        Paragraph::new(format!("Remaining: {}", remaining)).style(Style::default().fg(Color::Gray)),
        chunks[3],
    );

    render_rows(frame, app, chunks[5]);

    let add_style = if allocation.can_add() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("[a] + Add Beneficiary", add_style)),
        chunks[6],
    );

    frame.render_widget(
        Paragraph::new(continue_button("Continue to Document Upload", app))
            .alignment(Alignment::Center),
        chunks[8],
    );
}

fn render_rows(frame: &mut Frame, app: &App, area: Rect) {
    let allocation = app.wizard.allocation();

    let visible = area.height as usize;
    let offset = scroll_offset(app.beneficiary_index, allocation.len(), visible);

    let rows = allocation
        .beneficiaries()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible);

    for (line, (i, beneficiary)) in rows.enumerate() {
        let row = Rect::new(area.x, area.y + line as u16, area.width, 1);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(28),
                Constraint::Length(20),
                Constraint::Min(0),
            ])
            .split(row);

        let selected = i == app.beneficiary_index;
        let editing = app.editor.as_ref().filter(|e| e.index == i);

        let marker_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(Span::styled(if selected { "▶ " } else { "  " }, marker_style)),
            cols[0],
        );

        match editing {
            Some(editor) if editor.field == EditField::Name => {
                frame.render_widget(&editor.input, cols[1]);
            }
            _ => {
                let style = if beneficiary.name.trim().is_empty() {
                    Style::default().fg(Color::DarkGray)
                } else if selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(beneficiary.display_name().to_string(), style)),
                    cols[1],
                );
            }
        }

        match editing {
            Some(editor) if editor.field == EditField::Share => {
                frame.render_widget(&editor.input, cols[2]);
            }
            _ => {
                let plus_style = if allocation.can_increase(i) {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let minus_style = if beneficiary.share.is_zero() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                frame.render_widget(
                    Paragraph::new(Line::from(vec![
                        Span::styled("[-] ", minus_style),
                        Span::styled(
                            format!("{:>6}", beneficiary.share.to_string()),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(" [+]", plus_style),
                    ])),
                    cols[2],
                );
            }
        }

        if allocation.can_remove() && selected && editing.is_none() {
            frame.render_widget(
                Paragraph::new(Span::styled("[x] Remove", Style::default().fg(Color::Red))),
                cols[3],
            );
        }
    }
}
