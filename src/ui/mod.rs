//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout (header, search bar, records table, footer, log pane)
//! - The add/edit modal and the delete confirmation dialog
//! - Theme management
//! - Widget components (spinner, styling)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::Theme;
