//! Navigation-related state types.

/// Specifying which part of the screen receives key events.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Focus {
    #[default]
    Table,
    Search,
    Modal,
    ConfirmDelete,
}
