//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the panel.

// =============================================================================
// Application Metadata
// =============================================================================

/// Panel title shown in the toolbar.
pub const APP_NAME: &str = "Projects";

/// Label of the synthetic breadcrumb that stands for the scanned root.
pub const ROOT_CRUMB_LABEL: &str = "Projects";

// =============================================================================
// File Classification
// =============================================================================

/// Lowercase extension sets used to classify scanned files.
pub mod extensions {
    /// Media that only ever serves as a preview for another entry.
    ///
    /// Never listed, never searchable.
    pub const PREVIEW_ONLY: &[&str] = &["png", "jpg", "jpeg", "gif", "mp4", "mov"];

    /// Motion previews paired with project files.
    pub const MOTION_PREVIEW: &[&str] = &["gif", "mp4"];

    /// Motion preview kind that wins when several share a basename.
    pub const PREFERRED_MOTION_PREVIEW: &str = "gif";

    /// Still thumbnails for folders and files.
    pub const STATIC_PREVIEW: &[&str] = &["png"];

    /// Archive-like project files that open as virtual folders.
    pub const PROJECT: &[&str] = &["aep", "pack"];

    pub const SCRIPT: &[&str] = &["jsx", "jsxbin"];

    pub const PRESET: &[&str] = &["ffx", "prst"];

    pub const IMAGE: &[&str] = &[
        "png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "psd", "ai", "svg",
    ];

    pub const VIDEO: &[&str] = &[
        "mp4", "mov", "avi", "webm", "mkv", "flv", "wmv", "mpg", "mpeg",
    ];

    pub const AUDIO: &[&str] = &["mp3", "wav", "aac", "flac", "ogg", "wma"];
}

// =============================================================================
// Sidecar Metadata
// =============================================================================

/// Keys the panel reads out of a folder's `info.json` blob.
pub mod sidecar {
    /// Alternate motion preview for project files without a paired gif/mp4.
    pub const VIDEO_PREVIEW_KEY: &str = "videoPreview";
}

// =============================================================================
// Persistence
// =============================================================================

/// localStorage keys.
pub mod storage {
    /// Ordered array of favorite ids.
    pub const FAVORITES_KEY: &str = "projects_panel_favorites";
    /// Map of favorite id to entry snapshot.
    pub const FAVORITE_ITEMS_KEY: &str = "projects_panel_favorites_items";
}

// =============================================================================
// Host Bridge
// =============================================================================

/// CEP host bridge wiring.
pub mod bridge {
    /// Global object CEP injects into the panel's window.
    pub const CEP_GLOBAL: &str = "__adobe_cep__";
    /// Literal the host returns for a successful boolean-style call.
    pub const SUCCESS: &str = "true";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Notification toast behavior.
pub mod notice {
    /// How long a toast stays visible, in milliseconds.
    pub const DISPLAY_MS: u32 = 3000;
}
