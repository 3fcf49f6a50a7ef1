//! Leave-kiosk confirmation
//!
//! Shown when `q` is pressed mid-registration. Lists what the citizen has
//! entered so far, since leaving drops the session without registering.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Screen, WitnessSlot};
use crate::services::Wizard;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// What would be lost by leaving now, one line per captured item
pub fn discard_summary(wizard: &Wizard) -> Vec<String> {
    let screen = wizard.screen();
    let mut lines = vec![format!(
        "Step {} of {}: {}",
        screen.step_number(),
        Screen::STEP_COUNT,
        screen.title()
    )];

    if let Some(religion) = wizard.religion() {
        lines.push(format!(
            "{} beneficiaries ({} allocated, {})",
            wizard.allocation().len(),
            wizard.allocation().total(),
            religion
        ));
    }
    if !wizard.documents().is_empty() {
        lines.push(format!("{} document(s) uploaded", wizard.documents().len()));
    }
    if let Some(executor) = wizard.executor() {
        lines.push(format!("Executor: {}", executor));
    }
    let verified = WitnessSlot::ALL
        .iter()
        .filter(|slot| wizard.witness(**slot).verified)
        .count();
    if verified > 0 {
        lines.push(format!("{} of 2 witnesses verified", verified));
    }

    lines
}

pub fn render(frame: &mut Frame, app: &App) {
    let summary = discard_summary(&app.wizard);

    let mut lines = vec![
        Line::from(Span::styled(
            "Leave the kiosk? This registration will be discarded.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.wizard.session().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    lines.extend(
        summary
            .into_iter()
            .map(|item| Line::from(Span::styled(item, Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" y ", Style::default().fg(Color::Black).bg(Color::Red)),
        Span::raw(" Leave    "),
        Span::styled(" n ", Style::default().fg(Color::Black).bg(Color::Green)),
        Span::raw(" Continue registration"),
    ]));

    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_fixed(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Leave Kiosk ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KioskService, Religion};

    #[test]
    fn test_summary_on_welcome_is_just_the_step() {
        let mut wizard = Wizard::new();
        wizard.select_service(KioskService::DigitalWill).unwrap();
        assert_eq!(discard_summary(&wizard), vec!["Step 1 of 8: Welcome".to_string()]);
    }

    #[test]
    fn test_summary_lists_allocation() {
        let mut wizard = Wizard::new();
        wizard.select_service(KioskService::DigitalWill).unwrap();
        wizard.detect_card().unwrap();
        wizard.advance().unwrap();
        wizard.scan_fingerprint().unwrap();
        wizard.advance().unwrap();
        wizard.select_religion(Religion::NonMuslim).unwrap();

        let summary = discard_summary(&wizard);
        assert_eq!(summary[0], "Step 4 of 8: Asset Distribution");
        assert_eq!(summary[1], "2 beneficiaries (100.0% allocated, Non-Muslim)");
        assert_eq!(summary.len(), 2);
    }
}
