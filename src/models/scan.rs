//! Raw records returned by the host's scan and project queries.
//!
//! These mirror the JSON the host emits. Every list field is lenient: a
//! missing or non-array value reads as empty, and elements that fail to
//! parse are dropped instead of failing the whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize a list, degrading anything that is not an array to empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Strip the final `.ext` from a file name.
pub fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

// =============================================================================
// Folder Scan
// =============================================================================

/// A file found by the host scan.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FileRecord {
    pub name: String,
    /// Absolute filesystem path
    pub path: String,
    /// Lowercase extension as reported by the host
    #[serde(default, rename = "type")]
    pub file_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    /// Relative folder path (empty or missing = root)
    #[serde(default)]
    pub folder: Option<String>,
    /// Parent folder's `info.json` blob
    #[serde(default)]
    pub info: Option<Value>,
}

impl FileRecord {
    /// Lowercase extension, falling back to the file name when the host
    /// omitted `type`.
    pub fn extension(&self) -> String {
        match self.file_type.as_deref() {
            Some(ext) if !ext.is_empty() => ext.to_lowercase(),
            _ => match self.name.rsplit_once('.') {
                Some((_, ext)) => ext.to_lowercase(),
                None => String::new(),
            },
        }
    }

    /// Relative folder path, empty for root.
    pub fn folder_path(&self) -> &str {
        self.folder.as_deref().unwrap_or_default()
    }

    /// File name without its extension.
    pub fn basename(&self) -> &str {
        strip_extension(&self.name)
    }
}

/// A folder found by the host scan.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FolderRecord {
    pub name: String,
    /// Slash-joined path relative to the scanned root
    pub path: String,
    /// Absolute filesystem path, when the host provides one
    #[serde(default, rename = "fullPath")]
    pub full_path: Option<String>,
    #[serde(default)]
    pub info: Option<Value>,
}

impl FolderRecord {
    /// Number of non-empty path segments.
    pub fn depth(&self) -> usize {
        self.path.split('/').filter(|s| !s.is_empty()).count()
    }
}

/// Payload of `scanFolder()`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ScanPayload {
    #[serde(default, deserialize_with = "lenient_list")]
    pub files: Vec<FileRecord>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub folders: Vec<FolderRecord>,
    #[serde(default, rename = "folderCount")]
    pub folder_count: Option<u64>,
}

// =============================================================================
// Project File Contents
// =============================================================================

/// A composition inside a project file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompRecord {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Seconds
    pub duration: f64,
    pub frame_rate: f64,
    pub num_layers: u32,
}

/// A footage item inside a project file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FootageRecord {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub duration: f64,
}

/// Payload of `getProjectFileContents(path)`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ProjectContents {
    #[serde(default, deserialize_with = "lenient_list")]
    pub compositions: Vec<CompRecord>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub footage: Vec<FootageRecord>,
}

/// Payload of `getProjectFileDetails(path)`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(default)]
    pub num_items: u32,
    #[serde(default)]
    pub num_comps: u32,
    #[serde(default)]
    pub num_footage: u32,
    #[serde(default, deserialize_with = "lenient_list")]
    pub compositions: Vec<CompRecord>,
}
