//! Utility modules for storage, formatting, and browser glue.
//!
//! Provides:
//! - [`KeyValueStore`] - String store with localStorage and in-memory backends
//! - [`format_file_size`], [`format_duration`] - Display formatting
//! - [`init_logging`] - Tracing subscriber writing to the browser console

pub mod dom;
pub mod format;
mod logging;
pub mod storage;

pub use format::{format_duration, format_file_size, format_frame_rate};
pub use logging::init_logging;
#[cfg(any(test, feature = "mock"))]
pub use storage::MemoryStore;
pub use storage::{KeyValueStore, LocalStore, get_json, set_json};
