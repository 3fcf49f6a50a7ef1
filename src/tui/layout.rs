//! Layout definitions for the TUI
//!
//! The kiosk uses one column: progress stepper on top, the active screen in
//! the middle and a one-line status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the progress stepper header
const HEADER_HEIGHT: u16 = 3;

/// Widest the screen content is allowed to grow
pub const CONTENT_MAX_WIDTH: u16 = 84;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Progress stepper (zero height on the menu)
    pub header: Rect,
    /// Active screen
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, show_header: bool) -> Self {
        let header_height = if show_header { HEADER_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: centered_column(CONTENT_MAX_WIDTH, chunks[1]),
            status_bar: chunks[2],
        }
    }
}

/// A full-height column of at most `width` cells, centered horizontally
pub fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Bottom-right corner box for toasts, kept clear of the status bar
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height.saturating_sub(1));
    let x = r.x + r.width - width;
    let y = (r.y + r.height).saturating_sub(height + 1).max(r.y);
    Rect::new(x, y, width, height)
}
