//! Host bridge protocol.
//!
//! The host exposes named procedures that take string arguments and answer
//! with exactly one string, asynchronously, with no ordering guarantee
//! between overlapping calls and no cancellation. A call that never returns
//! simply never resolves; no timeout is applied.
//!
//! Raw results are turned into typed values here and nowhere else:
//! - boolean-style procedures succeed only on the literal `"true"`
//! - data-style procedures return JSON, failing when it carries `error`
//! - an absent, empty or `"undefined"` result means the bridge is unavailable

mod cep;
mod client;
#[cfg(any(test, feature = "mock"))]
mod mock;

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::bridge::SUCCESS;
use crate::core::error::BridgeError;

pub use cep::CepBridge;
pub use client::{HostClient, ScriptOutcome};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockBridge;

/// Names of the host procedures the panel calls.
pub mod procedures {
    pub const SCAN_FOLDER: &str = "scanFolder";
    pub const GET_PROJECT_FILE_CONTENTS: &str = "getProjectFileContents";
    pub const GET_PROJECT_FILE_DETAILS: &str = "getProjectFileDetails";
    pub const IMPORT_PROJECT_FILE: &str = "importProjectFile";
    pub const IMPORT_PROJECT_FILE_TO_TIMELINE: &str = "importProjectFileToTimeline";
    pub const IMPORT_COMPOSITION_TO_TIMELINE: &str = "importCompositionToTimeline";
    pub const EXECUTE_SCRIPT_FILE: &str = "executeScriptFile";
    pub const APPLY_PRESET_TO_SELECTED_LAYER: &str = "applyPresetToSelectedLayer";
    pub const IMPORT_MEDIA_FILE: &str = "importMediaFile";
    pub const IMPORT_MEDIA_FILE_TO_TIMELINE: &str = "importMediaFileToTimeline";
}

/// An asynchronous channel to the privileged host process.
pub trait HostBridge {
    /// Evaluate `script` in the host.
    ///
    /// Resolves with the host's result string, or `None` when the host
    /// produced no string at all.
    fn eval_script(&self, script: String) -> impl Future<Output = Option<String>>;
}

// =============================================================================
// Script Serialization
// =============================================================================

/// Escape an argument for interpolation inside a double-quoted host string.
pub fn escape_argument(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build the call expression `procedure("arg", ...)`.
pub fn script_for(procedure: &str, args: &[&str]) -> String {
    let args = args
        .iter()
        .map(|arg| format!("\"{}\"", escape_argument(arg)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", procedure, args)
}

// =============================================================================
// Result Decoding
// =============================================================================

/// The result text, or `None` when the bridge produced nothing usable.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|text| !text.is_empty() && *text != "undefined")
}

/// Decode a boolean-style result.
pub fn decode_status(raw: Option<&str>) -> Result<(), BridgeError> {
    match present(raw) {
        None => Err(BridgeError::Unavailable),
        Some(SUCCESS) => Ok(()),
        Some(other) => Err(BridgeError::Host(other.to_string())),
    }
}

/// Decode a data-style JSON result.
pub fn decode_payload<T: DeserializeOwned>(raw: Option<&str>) -> Result<T, BridgeError> {
    let text = present(raw).ok_or(BridgeError::Unavailable)?;
    let value: Value = serde_json::from_str(text)
        .map_err(|e| BridgeError::MalformedResponse(e.to_string()))?;

    match value.get("error") {
        None | Some(Value::Null) => {}
        Some(Value::String(message)) => return Err(BridgeError::Host(message.clone())),
        Some(other) => return Err(BridgeError::Host(other.to_string())),
    }

    serde_json::from_value(value).map_err(|e| BridgeError::MalformedResponse(e.to_string()))
}
