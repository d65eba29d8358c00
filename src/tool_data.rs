/// Data structures for the shared `tools` table
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved tool as returned by the remote table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    pub id: Uuid,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub favicon_url: Option<String>,
    pub saved_by: String,
    #[serde(default)]
    pub times_opened: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Tool {
    /// Note text, empty when there is none
    pub fn note(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// A row to insert; id, counter and timestamp are filled in by the table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTool {
    pub url: String,
    pub name: String,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub favicon_url: Option<String>,
    pub saved_by: String,
}

/// Partial update; only the fields that are set get sent
///
/// `description: Some(None)` clears the note (serialized as `null`).
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ToolPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_opened: Option<u32>,
}

impl ToolPatch {
    pub fn times_opened(count: u32) -> ToolPatch {
        ToolPatch {
            times_opened: Some(count),
            ..ToolPatch::default()
        }
    }
}

/// Empty note text means "no note"
pub fn note_or_none(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
