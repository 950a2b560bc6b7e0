use super::{confirm_delete, footer, header, log, modal, records, search, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the log pane when visible.
///
const LOG_HEIGHT: u16 = 8;

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let log_height = if state.is_log_visible() { LOG_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Length(3),          // Search
            Constraint::Min(5),             // Records table
            Constraint::Length(log_height), // Log
            Constraint::Length(1),          // Footer
        ])
        .split(size);

    header(frame, chunks[0], state);
    search(frame, chunks[1], state);
    records(frame, chunks[2], state);
    if log_height > 0 {
        log(frame, chunks[3], state);
    }
    footer(frame, chunks[4], state);

    if state.is_modal_open() {
        modal(frame, size, state);
    }
    if state.pending_delete().is_some() {
        confirm_delete(frame, size, state);
    }
}

/// Return a rectangle of the given percentage size centered within `r`.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
