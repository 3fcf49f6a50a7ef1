//! Profile confirmation and religion selection

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::models::Religion;
use crate::tui::app::App;

use super::{labelled, render_centered, BRAND};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let citizen = &app.settings.citizen;
    let selected = app.wizard.religion();

    let mut lines = vec![
        labelled("Name", citizen.name.clone()),
        labelled("IC Number", citizen.ic_number.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Please select your religion (This will be read from IC in final version)",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    let buttons: Vec<Span> = [(Religion::Muslim, 'm'), (Religion::NonMuslim, 'n')]
        .into_iter()
        .flat_map(|(religion, key)| {
            let style = if selected == Some(religion) {
                Style::default()
                    .fg(Color::White)
                    .bg(BRAND)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(BRAND)
            };
            [
                Span::styled(format!(" [{}] {} ", key, religion.label()), style),
                Span::raw("    "),
            ]
        })
        .collect();
    lines.push(Line::from(buttons));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Maximum allocation: {}", Religion::cap_for(selected)),
        Style::default().fg(Color::Gray),
    )));

    render_centered(frame, area, "User Profile", lines);
}
