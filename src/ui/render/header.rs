use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render title banner with record counts and request activity.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(32)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("Form Manager", styling::banner_style(theme)),
        Span::styled(
            format!("  v{}", env!("CARGO_PKG_VERSION")),
            styling::muted_text_style(theme),
        ),
    ]));
    frame.render_widget(title, columns[0]);

    let mut status = vec![];
    if state.is_loading() {
        status.push(spinner::span(state));
        status.push(Span::raw("  "));
    }
    status.push(Span::styled(
        format!(
            "{} of {} records",
            state.filtered_records().len(),
            state.records().len()
        ),
        styling::normal_text_style(theme),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        columns[1],
    );
}
