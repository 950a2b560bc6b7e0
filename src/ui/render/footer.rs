use super::Frame;
use crate::state::{Focus, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label and key hints for the focused area.
///
fn controls_for(focus: Focus) -> (&'static str, &'static str) {
    match focus {
        Focus::Table => (
            "NORMAL:",
            " j/k: navigate, a: add, e: edit, d: delete, /: search, r: refresh, l: log, q: quit",
        ),
        Focus::Search => (
            "SEARCH:",
            " type to filter, Enter: keep filter, Esc: clear filter",
        ),
        Focus::Modal => (
            "EDIT:",
            " Tab/Shift-Tab: switch field, Enter: submit, Esc: cancel",
        ),
        Focus::ConfirmDelete => ("DELETE:", " Enter: confirm, Esc: cancel"),
    }
}

/// Render footer with mode, key hints and any pending notice.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let focus = state.current_focus();
    let (mode, controls) = controls_for(focus);
    let mode_bg = match focus {
        Focus::Table => theme.footer_normal,
        Focus::Search => theme.footer_search,
        Focus::Modal => theme.footer_edit,
        Focus::ConfirmDelete => theme.footer_delete,
    };

    let controls_content = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.text.to_color())
                .bg(mode_bg.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(controls, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = match state.notice() {
        Some(notice) => Line::from(Span::styled(
            format!("{} (Esc to dismiss)", notice),
            Style::default()
                .fg(theme.error.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        None if !state.search_term().is_empty() => Line::from(Span::styled(
            format!("/{}", state.search_term()),
            Style::default().fg(theme.text_muted.to_color()),
        )),
        None => Line::from(""),
    };

    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_focus_has_hints() {
        for focus in [Focus::Table, Focus::Search, Focus::Modal, Focus::ConfirmDelete] {
            let (mode, controls) = controls_for(focus);
            assert!(mode.ends_with(':'));
            assert!(!controls.is_empty());
        }
    }
}
