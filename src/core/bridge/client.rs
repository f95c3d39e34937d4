//! Typed client over a [`HostBridge`].

use serde::de::DeserializeOwned;
use tracing::debug;

use super::procedures::*;
use super::{HostBridge, decode_payload, decode_status, script_for};
use crate::core::error::BridgeError;
use crate::models::{ProjectContents, ProjectDetails, ScanPayload};

/// Result of running a script file in the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// The script reported plain success
    Completed,
    /// The script returned a value
    Returned(String),
}

/// Decode the result of `executeScriptFile`.
pub fn decode_script_result(raw: Option<&str>) -> Result<ScriptOutcome, BridgeError> {
    match raw {
        None | Some("") | Some("undefined") => Err(BridgeError::Unavailable),
        Some(text) if text == crate::config::bridge::SUCCESS => Ok(ScriptOutcome::Completed),
        Some(text) if text.starts_with("Error") => Err(BridgeError::Host(text.to_string())),
        Some(text) => Ok(ScriptOutcome::Returned(text.to_string())),
    }
}

/// Issues host procedures and decodes their results.
///
/// Overlapping calls are allowed and complete in any order.
#[derive(Clone, Debug, Default)]
pub struct HostClient<B> {
    bridge: B,
}

impl<B: HostBridge> HostClient<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    async fn call(&self, procedure: &str, args: &[&str]) -> Option<String> {
        debug!(procedure, ?args, "host call");
        let raw = self.bridge.eval_script(script_for(procedure, args)).await;
        debug!(procedure, has_result = raw.is_some(), "host call returned");
        raw
    }

    async fn call_status(&self, procedure: &str, args: &[&str]) -> Result<(), BridgeError> {
        decode_status(self.call(procedure, args).await.as_deref())
    }

    async fn call_payload<T: DeserializeOwned>(
        &self,
        procedure: &str,
        args: &[&str],
    ) -> Result<T, BridgeError> {
        decode_payload(self.call(procedure, args).await.as_deref())
    }

    // =========================================================================
    // Data Procedures
    // =========================================================================

    /// Scan the Projects folder.
    pub async fn scan_folder(&self) -> Result<ScanPayload, BridgeError> {
        self.call_payload(SCAN_FOLDER, &[]).await
    }

    /// List compositions and footage inside a project file.
    pub async fn project_contents(&self, path: &str) -> Result<ProjectContents, BridgeError> {
        self.call_payload(GET_PROJECT_FILE_CONTENTS, &[path]).await
    }

    /// Item counts and composition metadata of a project file.
    pub async fn project_details(&self, path: &str) -> Result<ProjectDetails, BridgeError> {
        self.call_payload(GET_PROJECT_FILE_DETAILS, &[path]).await
    }

    // =========================================================================
    // Host Mutations
    // =========================================================================

    pub async fn import_project_file(&self, path: &str) -> Result<(), BridgeError> {
        self.call_status(IMPORT_PROJECT_FILE, &[path]).await
    }

    pub async fn import_project_file_to_timeline(&self, path: &str) -> Result<(), BridgeError> {
        self.call_status(IMPORT_PROJECT_FILE_TO_TIMELINE, &[path]).await
    }

    pub async fn import_composition_to_timeline(
        &self,
        project_path: &str,
        composition: &str,
    ) -> Result<(), BridgeError> {
        self.call_status(IMPORT_COMPOSITION_TO_TIMELINE, &[project_path, composition])
            .await
    }

    pub async fn execute_script_file(&self, path: &str) -> Result<ScriptOutcome, BridgeError> {
        decode_script_result(self.call(EXECUTE_SCRIPT_FILE, &[path]).await.as_deref())
    }

    pub async fn apply_preset_to_selected_layer(&self, path: &str) -> Result<(), BridgeError> {
        self.call_status(APPLY_PRESET_TO_SELECTED_LAYER, &[path]).await
    }

    pub async fn import_media_file(&self, path: &str) -> Result<(), BridgeError> {
        self.call_status(IMPORT_MEDIA_FILE, &[path]).await
    }

    pub async fn import_media_file_to_timeline(&self, path: &str) -> Result<(), BridgeError> {
        self.call_status(IMPORT_MEDIA_FILE_TO_TIMELINE, &[path]).await
    }
}
