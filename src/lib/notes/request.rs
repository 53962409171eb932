//! This module declares all types that may be used as request payloads.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for creating a note.
#[derive(Serialize, Deserialize, Debug)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    /// Kept as raw JSON so that clients sending something other than a
    /// boolean here are not rejected, see [`CreateNoteRequest::important_flag`].
    #[serde(default)]
    pub important: Value,
}

impl CreateNoteRequest {
    /// Interprets the `important` field leniently: a JSON boolean is taken
    /// as-is, anything else (including nothing at all) means `false`.
    pub fn important_flag(&self) -> bool {
        matches!(self.important, Value::Bool(true))
    }
}

/// Partial update for a note. Fields left out of the payload keep their
/// stored value.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}
