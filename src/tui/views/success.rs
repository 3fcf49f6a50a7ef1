//! Completion screen

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::tui::app::App;

use super::{labelled, render_centered, BRAND};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "✓ Will Successfully Registered with {}",
                app.settings.agency_code
            ),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(reference) = app.wizard.registration() {
        lines.push(labelled("Reference", reference.to_string()));
    }
    if let Some(executor) = app.wizard.executor() {
        lines.push(labelled("Executor", executor.title()));
    }
    lines.push(labelled(
        "Beneficiaries",
        app.wizard.allocation().len().to_string(),
    ));

    lines.extend([
        Line::from(""),
        Line::from("Please remove your MyKad."),
        Line::from(Span::styled(
            "A confirmation has been sent to your registered email.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ Enter ]  Finish / Return to Home",
            Style::default()
                .fg(Color::White)
                .bg(BRAND)
                .add_modifier(Modifier::BOLD),
        )),
    ]);

    render_centered(frame, area, "Registration Complete", lines);
}
