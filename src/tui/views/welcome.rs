//! Welcome screen with the MyKad insertion animation
//!
//! While waiting, an ASCII MyKad slides toward the reader slot on every tick.
//! Once detected the card rests in the slot and the reader light turns green.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::config::settings::CitizenProfile;
use crate::tui::app::App;

use super::{blink, continue_button, render_centered, ACCENT};

/// Number of positions the card slides through before looping
const SLIDE_STEPS: usize = 6;

/// Columns the card moves per step
const SLIDE_STRIDE: usize = 3;

/// ASCII MyKad face, fixed width
pub fn card_art(citizen: &CitizenProfile) -> Vec<String> {
    let name: String = citizen.name.chars().take(20).collect();
    let ic: String = citizen.ic_number.chars().take(20).collect();
    vec![
        "┌──────────────────────────────┐".to_string(),
        "│ MALAYSIA                   ★ │".to_string(),
        "│ ┌─────┐  NAMA / NAME         │".to_string(),
        format!("│ │PHOTO│  {:<20}│", name),
        "│ └─────┘  NO. K/P             │".to_string(),
        format!("│ [▤▤]     {:<20}│", ic),
        "└──────────────────────────────┘".to_string(),
    ]
}

/// Left padding of the card for an animation frame (0 when inserted)
pub fn card_offset(animation_frame: usize, inserted: bool) -> usize {
    if inserted {
        0
    } else {
        (SLIDE_STEPS - 1 - animation_frame % SLIDE_STEPS) * SLIDE_STRIDE
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let detected = app.wizard.card_detected();
    let offset = card_offset(app.animation_frame, detected);
    let pad = SLIDE_STEPS * SLIDE_STRIDE;

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Welcome to {} Digital Will Service", app.settings.agency_code),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Please insert your MyKad into the card reader"),
    ];
    if !detected {
        lines.push(Line::from(Span::styled(
            "Follow the animation to insert your MyKad",
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    let card_style = if detected {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Cyan)
    };
    for row in card_art(&app.settings.citizen) {
        // The padding keeps the block width constant so centering does not jitter
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad - offset)),
            Span::styled(row, card_style),
            Span::raw(" ".repeat(offset)),
            Span::styled(" ▐██▌", Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    let (light, light_style) = if detected {
        ("● READY", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else if blink(app.animation_frame) {
        ("● WAITING...", Style::default().fg(ACCENT))
    } else {
        ("○ WAITING...", Style::default().fg(ACCENT))
    };
    lines.push(Line::from(Span::styled(light, light_style)));
    lines.push(Line::from(""));

    if detected {
        lines.extend(continue_button("✓ IC Verified - Proceed", app));
    } else {
        lines.push(Line::from(Span::styled(
            "[ Space ]  IC Detected - Click Here",
            Style::default().fg(Color::Black).bg(ACCENT),
        )));
    }

    render_centered(frame, area, "Welcome", lines);
}
