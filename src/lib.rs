//! After Effects "Projects" panel.
//!
//! Browses a scanned asset folder as a tree, searches it, keeps favorites
//! and imports or applies entries through the CEP host bridge.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
