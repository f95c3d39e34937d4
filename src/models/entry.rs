//! Entries of the browsable tree.
//!
//! An [`Entry`] is what every listing, search result and favorite is made
//! of. Folders own their children; compositions and footage are synthesized
//! when a project file is opened as a virtual folder.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::extensions;
use crate::utils::format::{format_duration, format_frame_rate};

// =============================================================================
// File Kind
// =============================================================================

/// Broad category of a file, derived from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// `.aep` / `.pack` project archives
    Project,
    /// ExtendScript files
    Script,
    /// Animation presets
    Preset,
    Image,
    Video,
    Audio,
    Other,
}

impl FileKind {
    /// Classify a (case-insensitive) extension.
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        let ext = ext.as_str();
        if extensions::PROJECT.contains(&ext) {
            Self::Project
        } else if extensions::SCRIPT.contains(&ext) {
            Self::Script
        } else if extensions::PRESET.contains(&ext) {
            Self::Preset
        } else if extensions::IMAGE.contains(&ext) {
            Self::Image
        } else if extensions::VIDEO.contains(&ext) {
            Self::Video
        } else if extensions::AUDIO.contains(&ext) {
            Self::Audio
        } else {
            Self::Other
        }
    }

    /// Classify a path by its final extension.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Self::Other,
        }
    }
}

/// True for media kinds that only serve as previews.
pub fn is_preview_only(ext: &str) -> bool {
    extensions::PREVIEW_ONLY.contains(&ext.to_lowercase().as_str())
}

// =============================================================================
// Entry Variants
// =============================================================================

/// A file on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Name as scanned (possibly percent-encoded)
    pub name: String,
    pub display_name: String,
    /// Absolute filesystem path
    pub path: String,
    #[serde(default)]
    pub size: u64,
    /// Lowercase extension
    #[serde(default)]
    pub file_type: String,
    /// Owning folder's relative path (empty = root)
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub info: Option<Value>,
    /// Still thumbnail
    #[serde(default)]
    pub preview_path: Option<String>,
    /// Motion preview paired with a project file
    #[serde(default)]
    pub video_preview_path: Option<String>,
}

impl FileEntry {
    pub fn kind(&self) -> FileKind {
        FileKind::from_extension(&self.file_type)
    }

    /// Whether this file opens as a virtual folder.
    pub fn is_project(&self) -> bool {
        self.kind() == FileKind::Project
    }
}

/// A top-level folder of the scanned root.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderEntry {
    pub name: String,
    pub display_name: String,
    /// Slash-joined path relative to the scanned root
    pub path: String,
    #[serde(default)]
    pub full_path: String,
    /// Sorted listing of the folder's contents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entry>,
    #[serde(default)]
    pub info: Option<Value>,
    #[serde(default)]
    pub preview_path: Option<String>,
}

/// A composition inside an opened project file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionEntry {
    /// Path of the owning project file
    pub project_path: String,
    pub name: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub frame_rate: f64,
    #[serde(default)]
    pub num_layers: u32,
}

impl CompositionEntry {
    /// One-line description, e.g. `1920×1080 • 30fps • 10s • 4 layers`.
    pub fn summary(&self) -> String {
        format!(
            "{}×{} • {} • {} • {} layers",
            self.width,
            self.height,
            format_frame_rate(self.frame_rate),
            format_duration(self.duration),
            self.num_layers
        )
    }
}

/// A footage item inside an opened project file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootageEntry {
    pub project_path: String,
    pub name: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub duration: f64,
}

impl FootageEntry {
    pub fn summary(&self) -> String {
        format!(
            "{}×{} • {}",
            self.width,
            self.height,
            format_duration(self.duration)
        )
    }
}

// =============================================================================
// Entry
// =============================================================================

/// Any item that can appear in a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entry {
    #[serde(rename = "file")]
    File(FileEntry),
    #[serde(rename = "folder")]
    Folder(FolderEntry),
    #[serde(rename = "aep-composition")]
    Composition(CompositionEntry),
    #[serde(rename = "aep-footage")]
    Footage(FootageEntry),
}

impl Entry {
    /// Name shown to the user (decoded for scanned entries).
    pub fn display_name(&self) -> &str {
        match self {
            Entry::File(file) => &file.display_name,
            Entry::Folder(folder) => &folder.display_name,
            Entry::Composition(comp) => &comp.name,
            Entry::Footage(footage) => &footage.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }

    /// Extension of a scanned file; `None` for every other kind.
    pub fn file_type(&self) -> Option<&str> {
        match self {
            Entry::File(file) => Some(&file.file_type),
            _ => None,
        }
    }

    /// Contents of a folder (empty for everything else).
    pub fn children(&self) -> &[Entry] {
        match self {
            Entry::Folder(folder) => &folder.children,
            _ => &[],
        }
    }

    /// Key unique within any single listing.
    pub fn key(&self) -> String {
        match self {
            Entry::File(file) => format!("file:{}", file.path),
            Entry::Folder(folder) => format!("folder:{}", folder.path),
            Entry::Composition(comp) => format!("comp:{}:{}", comp.project_path, comp.name),
            Entry::Footage(footage) => {
                format!("footage:{}:{}", footage.project_path, footage.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_extension("aep"), FileKind::Project);
        assert_eq!(FileKind::from_extension("PACK"), FileKind::Project);
        assert_eq!(FileKind::from_extension("jsx"), FileKind::Script);
        assert_eq!(FileKind::from_extension("ffx"), FileKind::Preset);
        assert_eq!(FileKind::from_extension("psd"), FileKind::Image);
        assert_eq!(FileKind::from_extension("webm"), FileKind::Video);
        assert_eq!(FileKind::from_extension("wav"), FileKind::Audio);
        assert_eq!(FileKind::from_extension("txt"), FileKind::Other);
        assert_eq!(FileKind::from_path("/x/Lower Third.prst"), FileKind::Preset);
        assert_eq!(FileKind::from_path("noext"), FileKind::Other);
    }

    #[test]
    fn test_preview_only() {
        assert!(is_preview_only("GIF"));
        assert!(is_preview_only("mov"));
        assert!(!is_preview_only("aep"));
        assert!(!is_preview_only("webm"));
    }

    #[test]
    fn test_entry_snapshot_json_shape() {
        let entry = Entry::Composition(CompositionEntry {
            project_path: "/x/intro.aep".to_string(),
            name: "Main".to_string(),
            ..Default::default()
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "aep-composition");
        assert_eq!(json["projectPath"], "/x/intro.aep");

        let restored: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(restored, entry);
    }

    #[test]
    fn test_composition_summary() {
        let comp = CompositionEntry {
            project_path: String::new(),
            name: "Main".to_string(),
            width: 1920,
            height: 1080,
            duration: 10.0,
            frame_rate: 30.0,
            num_layers: 4,
        };
        assert_eq!(comp.summary(), "1920×1080 • 30fps • 10s • 4 layers");
    }
}
