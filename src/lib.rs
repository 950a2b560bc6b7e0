//! Terminal client for a remote collection of form records.
//!
//! Records (code, name, description) are fetched from a REST endpoint,
//! shown in a searchable table and created, edited or deleted through a
//! validated modal form.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
pub mod utils;
