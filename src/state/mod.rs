//! Application state management module.
//!
//! This module contains the form manager state, including:
//! - Main `State` struct that holds records, the search filter and the modal
//! - Modal form types and validation (ModalMode, FormField, FormErrors)
//! - Focus handling
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::{validate_form, FormErrors, FormField, ModalMode, CODE_MAX_LENGTH};
pub use navigation::Focus;
pub use state_impl::State;
