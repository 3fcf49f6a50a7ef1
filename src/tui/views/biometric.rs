//! Biometric check screen

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::tui::app::App;

use super::{blink, continue_button, render_centered, ACCENT};

const FINGERPRINT: [&str; 7] = [
    "   .-~~~~-.   ",
    "  / .-~~-. \\  ",
    " | / .--. \\ | ",
    " | | |()| | | ",
    " | \\ '--' / | ",
    "  \\ '-~~-' /  ",
    "   '-~~~~-'   ",
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let verified = app.wizard.biometric_verified();

    let prompt = if verified {
        Span::styled(
            "Identity Verified",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("Please place your right thumb on the scanner")
    };

    let mut lines = vec![Line::from(prompt), Line::from("")];

    let art_style = if verified {
        Style::default().fg(Color::Green)
    } else if blink(app.animation_frame) {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.extend(
        FINGERPRINT
            .iter()
            .map(|row| Line::from(Span::styled(*row, art_style))),
    );
    lines.push(Line::from(""));

    if verified {
        lines.extend(continue_button("✓ Verified - Proceed", app));
    } else {
        lines.push(Line::from(Span::styled(
            "[ Space ]  Fingerprint Detected",
            Style::default().fg(Color::Black).bg(ACCENT),
        )));
    }

    render_centered(frame, area, "Biometric Verification", lines);
}
