//! JSON envelope written to stdout

use serde::{Deserialize, Serialize};

use crate::error::ArtError;

/// The single JSON object the tool prints: `{"ascii_art": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AsciiArtDocument {
    pub ascii_art: String,
}

impl AsciiArtDocument {
    pub fn new(ascii_art: impl Into<String>) -> Self {
        Self {
            ascii_art: ascii_art.into(),
        }
    }

    /// Compact JSON encoding; newlines inside the art are escaped so the
    /// document always fits on one line.
    pub fn to_json_line(&self) -> Result<String, ArtError> {
        Ok(serde_json::to_string(self)?)
    }
}
