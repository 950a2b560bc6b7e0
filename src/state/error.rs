//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No table row is selected
    #[error("No record selected")]
    NoSelection,

    /// Record not found in state
    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    /// Network thread is not reachable
    #[error("Network channel unavailable: {0}")]
    NetworkUnavailable(String),
}
