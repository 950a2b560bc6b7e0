//! Utility helpers shared by state and rendering.

pub mod filter;
