use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget with the most recent entries that fit.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log (l: hide)")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = usize::from(size.height.saturating_sub(2));
    let entries = state.get_log_entries();
    let start = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| {
            let style = if entry.contains("ERROR") {
                styling::error_text_style(theme)
            } else {
                styling::muted_text_style(theme)
            };
            ListItem::new(Line::from(vec![Span::styled(entry.clone(), style)]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
