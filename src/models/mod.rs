//! Data models and types for the panel.
//!
//! Contains domain types for:
//! - [`FileRecord`], [`FolderRecord`], [`ScanPayload`] - Raw host scan output
//! - [`Entry`] and its variants - The browsable tree
//! - [`PathComponent`], [`Breadcrumb`] - Navigation position
//! - [`Notice`] - Transient user notifications

mod entry;
mod navigation;
mod notice;
mod scan;

pub use entry::{
    CompositionEntry, Entry, FileEntry, FileKind, FolderEntry, FootageEntry, is_preview_only,
};
pub use navigation::{Breadcrumb, PathComponent, join_components};
pub use notice::{Notice, NoticeLevel};
pub use scan::{
    CompRecord, FileRecord, FolderRecord, FootageRecord, ProjectContents, ProjectDetails,
    ScanPayload, strip_extension,
};
