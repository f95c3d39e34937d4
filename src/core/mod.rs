//! Core logic of the panel.
//!
//! This module provides:
//! - [`tree::build`] turning the host's flat scan lists into a tree
//! - [`FolderModel`] navigation over that tree, with [`search`]
//! - [`FavoritesStore`] persistent favorites
//! - [`bridge`] the host call protocol and [`HostClient`]
//! - [`actions_for`] host actions per entry

mod actions;
pub mod bridge;
pub mod error;
mod favorites;
pub mod names;
mod navigation;
mod search;
pub mod tree;

pub use actions::{ActionOutcome, EntryAction, actions_for};
pub use bridge::{CepBridge, HostBridge, HostClient, ScriptOutcome};
pub use error::{BridgeError, NavigationError, StorageError};
pub use favorites::{FavoritesStore, favorite_id};
pub use names::decode_display_name;
pub use navigation::{FolderModel, Listing, ProjectRequest, Reload, ScanSummary};
pub use search::{SearchMatch, search};
