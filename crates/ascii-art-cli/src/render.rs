//! Text-to-ASCII-art rendering
//!
//! Glyph data and composition come from the `figlet-rs` crate and its
//! bundled `standard` font. This module only adapts that library to the
//! [`TextRenderer`] seam used by the CLI.

use figlet_rs::FIGfont;
use tracing::{debug, info_span, trace, warn};
use unicode_width::UnicodeWidthStr;

use crate::error::ArtError;

/// Anything that can turn a line of text into a block of ASCII art
pub trait TextRenderer {
    /// Render `text` as multi-line ASCII art, each row terminated by `\n`
    fn render(&self, text: &str) -> Result<String, ArtError>;
}

/// Widest block, in columns, before a line is continued in a new block
pub const DEFAULT_WIDTH: usize = 80;

/// Renderer backed by a FIGlet font
pub struct FigletRenderer {
    font: FIGfont,
    width: usize,
}

impl FigletRenderer {
    /// Load the bundled default (standard) FIGlet font
    pub fn standard() -> Result<Self, ArtError> {
        let font = FIGfont::standard().map_err(ArtError::font_load)?;
        debug!("Loaded standard FIGlet font");
        Ok(Self {
            font,
            width: DEFAULT_WIDTH,
        })
    }

    /// Render a single line with no wrapping
    fn render_line(&self, line: &str) -> String {
        if line.is_empty() {
            return String::new();
        }
        self.font
            .convert(line)
            .map(|figure| figure.to_string())
            .unwrap_or_default()
    }

    fn rendered_width(&self, line: &str) -> usize {
        art_dimensions(&self.render_line(line)).0
    }

    /// Split one input line into pieces whose art fits in `self.width`
    /// columns. Breaks at the last space of the overflowing piece, or
    /// before the overflowing character when the piece has no space.
    fn wrap_line(&self, line: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut current = String::new();

        for ch in line.chars() {
            let mut candidate = current.clone();
            candidate.push(ch);
            if current.is_empty() || self.rendered_width(&candidate) <= self.width {
                current = candidate;
                continue;
            }

            if ch == ' ' {
                pieces.push(std::mem::take(&mut current));
                continue;
            }

            let carry = match current.rfind(' ') {
                Some(idx) if idx > 0 => {
                    let rest = current.split_off(idx + 1);
                    current.truncate(idx);
                    rest
                }
                _ => String::new(),
            };
            pieces.push(std::mem::take(&mut current));

            current = carry;
            current.push(ch);
            if current.chars().count() > 1 && self.rendered_width(&current) > self.width {
                current.pop();
                pieces.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }

        if !current.is_empty() {
            pieces.push(current);
        }
        pieces
    }
}

impl TextRenderer for FigletRenderer {
    fn render(&self, text: &str) -> Result<String, ArtError> {
        let render_span = info_span!("render", input_len = text.len());
        let _enter = render_span.enter();

        if text.is_empty() {
            trace!("Empty input, nothing to render");
            return Ok(String::new());
        }

        // Each input line, and each wrapped piece of it, is its own block
        // stacked below the previous one. Characters missing from the font
        // are skipped by the library.
        let mut art = String::new();
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let pieces = self.wrap_line(line);
            trace!(pieces = pieces.len(), "Wrapped input line");
            for piece in pieces {
                art.push_str(&self.render_line(&piece));
            }
        }

        if art.is_empty() {
            warn!("No renderable characters in input");
        }

        let (width, height) = art_dimensions(&art);
        debug!(width, height, "Rendered ASCII art");

        Ok(art)
    }
}

/// Display width (widest row) and height (row count) of a rendered block
pub fn art_dimensions(art: &str) -> (usize, usize) {
    art.lines().fold((0, 0), |(width, height), line| {
        (width.max(UnicodeWidthStr::width(line)), height + 1)
    })
}
