//! UI components built with Leptos.
//!
//! - [`Panel`] - The Projects panel (toolbar, breadcrumbs, listing, toast)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
mod panel;

pub use panel::Panel;
