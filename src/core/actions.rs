//! Host actions available on entries.

use crate::core::bridge::{HostBridge, HostClient, ScriptOutcome};
use crate::core::error::BridgeError;
use crate::models::{Entry, FileKind};

/// An operation the host can perform on an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryAction {
    ImportProject,
    ImportProjectToTimeline,
    ImportCompositionToTimeline,
    RunScript,
    ApplyPreset,
    ImportMedia,
    ImportMediaToTimeline,
}

impl EntryAction {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ImportProject => "Import",
            Self::ImportProjectToTimeline => "Add to Timeline",
            Self::ImportCompositionToTimeline => "Add to Timeline",
            Self::RunScript => "Run Script",
            Self::ApplyPreset => "Apply to Layer",
            Self::ImportMedia => "Import",
            Self::ImportMediaToTimeline => "Add to Timeline",
        }
    }

    /// Notification shown when the action succeeds.
    pub fn success_message(self, name: &str) -> String {
        match self {
            Self::ImportProject | Self::ImportMedia => format!("Imported {}", name),
            Self::ImportProjectToTimeline
            | Self::ImportCompositionToTimeline
            | Self::ImportMediaToTimeline => format!("Added {} to timeline", name),
            Self::RunScript => format!("Ran {}", name),
            Self::ApplyPreset => format!("Applied {}", name),
        }
    }
}

/// Actions valid for `entry`, in display order.
pub fn actions_for(entry: &Entry) -> &'static [EntryAction] {
    match entry {
        Entry::File(file) => match file.kind() {
            FileKind::Project => &[
                EntryAction::ImportProject,
                EntryAction::ImportProjectToTimeline,
            ],
            FileKind::Script => &[EntryAction::RunScript],
            FileKind::Preset => &[EntryAction::ApplyPreset],
            FileKind::Image | FileKind::Video | FileKind::Audio | FileKind::Other => &[
                EntryAction::ImportMedia,
                EntryAction::ImportMediaToTimeline,
            ],
        },
        Entry::Composition(_) => &[EntryAction::ImportCompositionToTimeline],
        Entry::Folder(_) | Entry::Footage(_) => &[],
    }
}

/// Successful result of an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    /// A script ran and returned a value
    ScriptReturned(String),
}

impl<B: HostBridge> HostClient<B> {
    /// Perform `action` on `entry`.
    ///
    /// Returns `None` if the action does not apply to the entry.
    pub async fn perform(
        &self,
        action: EntryAction,
        entry: &Entry,
    ) -> Option<Result<ActionOutcome, BridgeError>> {
        if !actions_for(entry).contains(&action) {
            return None;
        }

        let result = match (action, entry) {
            (EntryAction::ImportCompositionToTimeline, Entry::Composition(comp)) => {
                self.import_composition_to_timeline(&comp.project_path, &comp.name)
                    .await
            }
            (EntryAction::RunScript, Entry::File(file)) => {
                return Some(self.execute_script_file(&file.path).await.map(
                    |outcome| match outcome {
                        ScriptOutcome::Completed => ActionOutcome::Done,
                        ScriptOutcome::Returned(value) => ActionOutcome::ScriptReturned(value),
                    },
                ));
            }
            (action, Entry::File(file)) => {
                let path = file.path.as_str();
                match action {
                    EntryAction::ImportProject => self.import_project_file(path).await,
                    EntryAction::ImportProjectToTimeline => {
                        self.import_project_file_to_timeline(path).await
                    }
                    EntryAction::ApplyPreset => self.apply_preset_to_selected_layer(path).await,
                    EntryAction::ImportMedia => self.import_media_file(path).await,
                    EntryAction::ImportMediaToTimeline => {
                        self.import_media_file_to_timeline(path).await
                    }
                    EntryAction::RunScript | EntryAction::ImportCompositionToTimeline => {
                        return None;
                    }
                }
            }
            _ => return None,
        };

        Some(result.map(|()| ActionOutcome::Done))
    }
}
