//! Media Showcase UI Components
//!
//! Reusable Dioxus widgets for the gallery. Page-specific components live in
//! the desktop crate; everything here is independent of the catalog's
//! runtime state.
//!
//! ## Palette
//!
//! - **Purple (#7c3aed)**: primary actions, active filter
//! - **Amber (#f59e0b)**: favorites
//! - **Night (#0f0a1e)**: background

pub mod components;

pub use components::*;
