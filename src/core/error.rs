//! Error types for the panel.
//!
//! Every failure the presentation layer may need to show funnels into one
//! of these enums; their `Display` text is what the user sees.
//!
//! - [`BridgeError`] - Host bridge calls (unavailable, malformed, host-reported)
//! - [`NavigationError`] - Opening a project file as a virtual folder
//! - [`StorageError`] - Key-value persistence

use thiserror::Error;

/// Failure of a host bridge call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The host never produced a result (bridge not initialized, or the
    /// panel is running outside the host).
    #[error("After Effects integration not available")]
    Unavailable,
    /// The host answered, but not with the expected JSON.
    #[error("malformed host response: {0}")]
    MalformedResponse(String),
    /// The host reported a failure, verbatim.
    #[error("{0}")]
    Host(String),
}

/// Failure to open a project file as a virtual folder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),
    /// Navigation moved on while the contents were in flight.
    #[error("navigation changed before the project contents arrived")]
    Superseded,
}

/// Key-value storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to serialize value: {0}")]
    Serialization(String),
    #[error("failed to write to localStorage")]
    WriteFailed,
}
