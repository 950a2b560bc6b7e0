use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render search box. The cursor block is drawn only while it has focus.
///
pub fn search(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let active = state.is_search_mode();
    let (border_style, title) = if active {
        (
            styling::active_block_border_style(theme),
            Span::styled("Search", styling::active_block_title_style()),
        )
    } else {
        (
            styling::normal_block_border_style(theme),
            Span::raw("Search (/)"),
        )
    };

    let content = if state.search_term().is_empty() && !active {
        Line::from(Span::styled(
            "Filter by code, name or description",
            styling::muted_text_style(theme),
        ))
    } else if active {
        Line::from(vec![
            Span::styled(state.search_term().to_string(), styling::normal_text_style(theme)),
            Span::styled("█", styling::active_block_border_style(theme)),
        ])
    } else {
        Line::from(Span::styled(
            state.search_term().to_string(),
            styling::normal_text_style(theme),
        ))
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, size);
}
