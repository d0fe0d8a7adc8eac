//! Command-line interface for the ascii-art-generator utility
//!
//! Takes exactly one positional argument and prints it as FIGlet art
//! inside a single-line JSON object.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::error::ArtError;
use crate::output::AsciiArtDocument;
use crate::render::{FigletRenderer, TextRenderer};

/// Render text as ASCII art and print it as `{"ascii_art": "..."}`
///
/// There are no flags: whatever is passed is the text, even if it looks
/// like an option.
#[derive(Parser, Debug)]
#[command(name = "ascii-art-generator")]
#[command(about = "Render text as FIGlet ASCII art wrapped in a JSON object")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Text to render
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

/// Main CLI application
pub struct AsciiArtApp<R = FigletRenderer> {
    renderer: R,
}

impl AsciiArtApp<FigletRenderer> {
    /// Create an application backed by the default FIGlet font
    pub fn new() -> Result<Self, ArtError> {
        Ok(Self::with_renderer(FigletRenderer::standard()?))
    }
}

impl<R: TextRenderer> AsciiArtApp<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        let document = self.generate(&cli.text)?;
        let stdout = io::stdout();
        self.write_document(&document, &mut stdout.lock())?;
        info!("Wrote ASCII art document");
        Ok(())
    }

    /// Render `text` and wrap the art in the output document
    pub fn generate(&self, text: &str) -> Result<AsciiArtDocument, ArtError> {
        debug!(chars = text.chars().count(), "Rendering input text");
        let art = self.renderer.render(text)?;
        Ok(AsciiArtDocument::new(art))
    }

    /// Write the document as one line of JSON and flush
    ///
    /// Encoding happens before any byte is written, so a failure leaves
    /// the writer untouched.
    pub fn write_document<W: Write>(
        &self,
        document: &AsciiArtDocument,
        writer: &mut W,
    ) -> Result<(), ArtError> {
        let line = document.to_json_line()?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}
