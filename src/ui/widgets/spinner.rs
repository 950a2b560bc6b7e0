use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::text::Span;

/// Braille frames cycled while requests are in flight.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return the current spinner frame as a styled span.
///
pub fn span(state: &State) -> Span<'static> {
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    Span::styled(
        format!("{} loading", frame),
        styling::muted_text_style(state.get_theme()),
    )
}
