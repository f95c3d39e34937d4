//! Persistent favorites.
//!
//! Favorites are keyed by an id derived from the entry, never by a
//! reference into the tree, so rescans cannot invalidate them. Two keys are
//! persisted: the ordered id list, and a map of id to a snapshot of the
//! entry as it looked when it was favorited.

use indexmap::IndexSet;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::storage::{FAVORITE_ITEMS_KEY, FAVORITES_KEY};
use crate::models::Entry;
use crate::utils::{KeyValueStore, get_json, set_json};

/// Stable id of a favoritable entry.
///
/// Footage is not favoritable.
pub fn favorite_id(entry: &Entry) -> Option<String> {
    match entry {
        Entry::Composition(comp) => Some(format!("comp:{}:{}", comp.project_path, comp.name)),
        Entry::File(file) => Some(format!("file:{}", file.path)),
        Entry::Folder(folder) => {
            let key = if folder.path.is_empty() {
                &folder.name
            } else {
                &folder.path
            };
            Some(format!("folder:{}", key))
        }
        Entry::Footage(_) => None,
    }
}

/// The favorite set, backed by a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct FavoritesStore<S> {
    store: S,
    ids: IndexSet<String>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load the id set from `store`. Missing or malformed data reads as empty.
    pub fn load(store: S) -> Self {
        let ids = get_json::<Vec<String>>(&store, FAVORITES_KEY)
            .unwrap_or_default()
            .into_iter()
            .collect();
        Self { store, ids }
    }

    pub fn is_favorited(&self, entry: &Entry) -> bool {
        favorite_id(entry).is_some_and(|id| self.ids.contains(&id))
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Flip the favorite state of `entry` and return the new state.
    ///
    /// Entries without an id are never favorited.
    pub fn toggle(&mut self, entry: &Entry) -> bool {
        let Some(id) = favorite_id(entry) else {
            debug!(entry = entry.display_name(), "entry is not favoritable");
            return false;
        };

        let mut items = self.snapshots();
        let favorited = if self.ids.shift_remove(&id) {
            items.remove(&id);
            false
        } else {
            match serde_json::to_value(snapshot_of(entry)) {
                Ok(snapshot) => {
                    items.insert(id.clone(), snapshot);
                }
                Err(e) => warn!(%id, error = %e, "failed to snapshot favorite"),
            }
            self.ids.insert(id);
            true
        };

        if let Err(e) = set_json(&self.store, FAVORITE_ITEMS_KEY, &items) {
            warn!(error = %e, "failed to persist favorite snapshots");
        }
        self.persist_ids();
        favorited
    }

    /// Snapshots of every favorite, in the order they were added.
    ///
    /// Ids whose snapshot is missing or unreadable are skipped.
    pub fn list(&self) -> Vec<Entry> {
        let items = self.snapshots();
        self.ids
            .iter()
            .filter_map(|id| {
                let snapshot = items.get(id)?.clone();
                serde_json::from_value(snapshot)
                    .inspect_err(|e| debug!(%id, error = %e, "unreadable favorite snapshot"))
                    .ok()
            })
            .collect()
    }

    /// Remove every favorite and both persisted keys.
    pub fn clear(&mut self) {
        self.ids.clear();
        for key in [FAVORITES_KEY, FAVORITE_ITEMS_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "failed to clear favorites");
            }
        }
    }

    fn snapshots(&self) -> Map<String, Value> {
        get_json(&self.store, FAVORITE_ITEMS_KEY).unwrap_or_default()
    }

    fn persist_ids(&self) {
        let ids: Vec<&String> = self.ids.iter().collect();
        if let Err(e) = set_json(&self.store, FAVORITES_KEY, &ids) {
            warn!(error = %e, "failed to persist favorites");
        }
    }
}

/// Denormalized copy of an entry; folders are stored without children.
fn snapshot_of(entry: &Entry) -> Entry {
    match entry {
        Entry::Folder(folder) => {
            let mut folder = folder.clone();
            folder.children.clear();
            Entry::Folder(folder)
        }
        other => other.clone(),
    }
}
