use super::Frame;
use crate::state::{FormField, ModalMode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Rows needed by the modal: three inputs with an error line each, the
/// status line, the action hints and the outer border.
///
const MODAL_HEIGHT: u16 = 3 * 4 + 1 + 1 + 2;

/// Render the add/edit modal on top of the screen.
///
pub fn modal(frame: &mut Frame, size: Rect, state: &mut State) {
    let area = popup_area(size);
    frame.render_widget(Clear, area);

    let theme = state.get_theme();
    let title = match state.modal_mode() {
        ModalMode::Add => " Add Form ",
        ModalMode::Edit => " Edit Form ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, styling::active_block_title_style()))
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![];
    for _ in FormField::ALL {
        constraints.push(Constraint::Length(3)); // Input
        constraints.push(Constraint::Length(1)); // Error
    }
    constraints.push(Constraint::Length(1)); // Status
    constraints.push(Constraint::Min(1)); // Actions
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let errors = state.field_errors();
    for (i, field) in FormField::ALL.into_iter().enumerate() {
        let focused = state.current_form_field() == field;
        render_input(
            frame,
            chunks[i * 2],
            field,
            field.value(state.form_data()),
            focused,
            state,
        );
        if let Some(message) = errors.for_field(field) {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {}", message),
                    styling::error_text_style(theme),
                )),
                chunks[i * 2 + 1],
            );
        }
    }

    let status_index = FormField::ALL.len() * 2;
    if let Some(status) = errors.status.as_deref() {
        frame.render_widget(
            Paragraph::new(Span::styled(status, styling::success_text_style(theme)))
                .alignment(Alignment::Center),
            chunks[status_index],
        );
    }

    let submit_label = match state.modal_mode() {
        ModalMode::Add => "Add",
        ModalMode::Edit => "Save",
    };
    let actions = Line::from(vec![
        Span::styled("Esc", styling::active_block_title_style()),
        Span::styled(" cancel   ", styling::muted_text_style(theme)),
        Span::styled("Enter", styling::active_block_title_style()),
        Span::styled(format!(" {}   ", submit_label), styling::muted_text_style(theme)),
        Span::styled("Tab", styling::active_block_title_style()),
        Span::styled(" next field", styling::muted_text_style(theme)),
    ]);
    frame.render_widget(
        Paragraph::new(actions).alignment(Alignment::Center),
        chunks[status_index + 1],
    );
}

fn render_input(
    frame: &mut Frame,
    size: Rect,
    field: FormField,
    value: &str,
    focused: bool,
    state: &State,
) {
    let theme = state.get_theme();
    let label = match field {
        FormField::Code => format!("{} (digits, max 5)", field.label()),
        _ => field.label().to_string(),
    };
    let (border_style, title) = if focused {
        (
            styling::active_block_border_style(theme).add_modifier(Modifier::BOLD),
            Span::styled(label, styling::active_block_title_style()),
        )
    } else {
        (styling::normal_block_border_style(theme), Span::raw(label))
    };

    let mut spans = vec![Span::styled(value.to_string(), styling::normal_text_style(theme))];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default().fg(theme.primary.to_color()),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, size);
}

/// Center the modal horizontally at 60% width with a fixed height.
///
fn popup_area(size: Rect) -> Rect {
    let height = MODAL_HEIGHT.min(size.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(size);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1])[1]
}
