//! Optional supporting documents

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::models::DocumentKind;
use crate::tui::app::App;

use super::{continue_button, render_centered};

/// Label of the forward control, which reports how many files were attached
pub fn continue_label(uploaded: usize) -> String {
    if uploaded == 0 {
        "Continue to Executor Selection (Skip Documents)".to_string()
    } else {
        format!(
            "Continue to Executor Selection ({} document(s) uploaded)",
            uploaded
        )
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let documents = app.wizard.documents();

    let mut lines = vec![
        Line::from("Upload supporting documents for your assets"),
        Line::from(Span::styled(
            "(Optional - You may proceed without uploading documents)",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    for (i, kind) in DocumentKind::ALL.iter().enumerate() {
        let status = if documents.contains(*kind) {
            Span::styled(
                "✓ Uploaded",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("[{}] Upload File", i + 1),
                Style::default().fg(Color::Cyan),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<22}", kind.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            status,
        ]));
        lines.push(Line::from(""));
    }

    lines.extend(continue_button(&continue_label(documents.len()), app));

    render_centered(frame, area, "Document Evidence Upload", lines);
}
