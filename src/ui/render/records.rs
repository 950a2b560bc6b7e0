use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

/// Render the filtered records as a table with a row action hint.
///
pub fn records(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let border_style = if state.current_focus() == Focus::Table {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Forms", styling::active_block_title_style()))
        .border_style(border_style);

    if state.filtered_records().is_empty() {
        let message = if state.is_loading() && state.records().is_empty() {
            "Loading records..."
        } else if state.records().is_empty() {
            "No records yet. Press a to add one."
        } else {
            "No records match the search."
        };
        let paragraph = Paragraph::new(Span::styled(message, styling::muted_text_style(theme)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let text_style = styling::normal_text_style(theme);
    let hint_style = styling::muted_text_style(theme);
    let header = Row::new(vec!["Code", "Name", "Description", "Actions"])
        .style(styling::table_header_style(theme))
        .bottom_margin(1);
    let rows: Vec<Row> = state
        .filtered_records()
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.code.clone()).style(text_style),
                Cell::from(record.name.clone()).style(text_style),
                Cell::from(record.description.clone()).style(text_style),
                Cell::from("e edit  d delete").style(hint_style),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(8),
        Constraint::Percentage(30),
        Constraint::Min(20),
        Constraint::Length(18),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(styling::highlighted_row_style(theme))
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, size, state.get_table_state());
}
