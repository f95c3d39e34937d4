//! Tree construction from the host's flat scan lists.
//!
//! Only top-level folders become navigable [`FolderEntry`] values; files in
//! deeper folders are attached to the folder named by the first segment of
//! their `folder` attribute. Preview-only media never become entries and
//! are instead attached as preview paths to the entries they illustrate.

use std::cmp::Ordering;
use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::config::{extensions, sidecar};
use crate::core::names::decode_display_name;
use crate::models::{
    Entry, FileEntry, FileRecord, FolderEntry, FolderRecord, is_preview_only,
};

/// Lookup key shared by previews and the entries they belong to.
fn preview_key(folder: &str, basename: &str) -> String {
    format!("{}/{}", folder, decode_display_name(basename))
}

/// Preview candidates collected in a first pass over the files.
#[derive(Default)]
struct Previews {
    /// gif/mp4 by key, gif wins ties
    motion: HashMap<String, String>,
    /// png by key
    still: HashMap<String, String>,
}

impl Previews {
    fn collect(files: &[FileRecord]) -> Self {
        let mut previews = Self::default();

        for file in files {
            let ext = file.extension();
            let key = preview_key(file.folder_path(), file.basename());

            if extensions::MOTION_PREVIEW.contains(&ext.as_str()) {
                if ext == extensions::PREFERRED_MOTION_PREVIEW
                    || !previews.motion.contains_key(&key)
                {
                    previews.motion.insert(key, file.path.clone());
                }
            } else if extensions::STATIC_PREVIEW.contains(&ext.as_str()) {
                previews.still.insert(key, file.path.clone());
            }
        }

        previews
    }
}

/// String value of the sidecar's alternate video preview key, if any.
fn sidecar_video_preview(info: Option<&Value>) -> Option<String> {
    info?
        .get(sidecar::VIDEO_PREVIEW_KEY)?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Build the ordered top-level listing from the scan's flat lists.
///
/// Pure: identical inputs always produce identical trees.
pub fn build(files: &[FileRecord], folders: &[FolderRecord]) -> Vec<Entry> {
    let previews = Previews::collect(files);

    // Top-level folders, keyed by their scanned (raw) name
    let mut folder_map: IndexMap<String, FolderEntry> = IndexMap::new();
    for folder in folders.iter().filter(|f| f.depth() == 1) {
        let display_name = decode_display_name(&folder.name);
        let preview_path = previews
            .still
            .get(&preview_key("", &folder.name))
            .or_else(|| previews.still.get(&preview_key(&folder.name, &folder.name)))
            .cloned();

        folder_map.insert(
            folder.name.clone(),
            FolderEntry {
                name: folder.name.clone(),
                display_name,
                path: folder.path.clone(),
                full_path: folder
                    .full_path
                    .clone()
                    .unwrap_or_else(|| folder.path.clone()),
                children: Vec::new(),
                info: folder.info.clone(),
                preview_path,
            },
        );
    }

    let mut root_items: Vec<Entry> = Vec::new();
    for file in files {
        let ext = file.extension();
        if is_preview_only(&ext) {
            continue;
        }

        let folder_path = file.folder_path();
        let key = preview_key(folder_path, file.basename());

        let mut entry = FileEntry {
            name: file.name.clone(),
            display_name: decode_display_name(&file.name),
            path: file.path.clone(),
            size: file.size.unwrap_or_default(),
            file_type: ext,
            folder: folder_path.to_string(),
            info: file.info.clone(),
            preview_path: previews.still.get(&key).cloned(),
            video_preview_path: None,
        };
        if entry.is_project() {
            entry.video_preview_path = previews
                .motion
                .get(&key)
                .cloned()
                .or_else(|| sidecar_video_preview(file.info.as_ref()));
        }

        let top_level = folder_path.split('/').next().unwrap_or_default();
        if let Some(folder) = folder_map.get_mut(top_level) {
            folder.children.push(Entry::File(entry));
        } else if folder_path.is_empty() {
            root_items.push(Entry::File(entry));
        } else {
            debug!(file = %file.path, folder = folder_path, "file outside any top-level folder");
        }
    }

    for (_, mut folder) in folder_map {
        sort_entries(&mut folder.children);
        root_items.push(Entry::Folder(folder));
    }
    sort_entries(&mut root_items);
    root_items
}

/// Case-insensitive name order with case as the tie-breaker.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Folders first, then everything else, each group by display name.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a.display_name(), b.display_name()),
    });
}
