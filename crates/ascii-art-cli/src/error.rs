//! Error types for rendering and emitting ASCII art
//!
//! Missing or malformed arguments never reach this module; clap reports
//! those itself before any rendering starts.

use thiserror::Error;

/// Errors raised while turning input text into a JSON art document
#[derive(Error, Debug)]
pub enum ArtError {
    #[error("Font error: {message}")]
    FontLoad { message: String },

    #[error("Encode error: {source}")]
    Encode {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ArtError {
    /// Create a new font load error
    pub fn font_load(message: impl Into<String>) -> Self {
        Self::FontLoad {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_load_error() {
        let error = ArtError::font_load("missing header");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Font error"));
        assert!(error_msg.contains("missing header"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let error: ArtError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("pipe closed"));
    }

    #[test]
    fn test_encode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ArtError = json_err.into();
        assert!(format!("{}", error).contains("Encode error"));
    }
}
