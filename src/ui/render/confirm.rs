use super::all::centered_rect;
use super::Frame;
use crate::state::State;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render delete confirmation dialog for the pending record.
///
pub fn confirm_delete(frame: &mut Frame, size: Rect, state: &mut State) {
    let popup_area = centered_rect(50, 25, size);
    frame.render_widget(Clear, popup_area);

    let theme = state.get_theme();
    let label = state
        .pending_delete()
        .and_then(|id| {
            state
                .records()
                .iter()
                .find(|r| &r.id == id)
                .map(|r| format!("{} ({})", r.name, r.code))
        })
        .unwrap_or_else(|| "this record".to_string());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete {}?", label),
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: confirm, Esc: cancel",
            Style::default().fg(theme.text_muted.to_color()),
        )),
    ];

    let error_style = Style::default()
        .fg(theme.error.to_color())
        .add_modifier(Modifier::BOLD);
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled("Confirm Delete", error_style))
                .border_style(error_style),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}
