//! # BannerTerm Core
//!
//! The banner rendering engine for BannerTerm.
//!
//! This crate provides:
//! - Banner file parsing into immutable glyph sets
//! - Row-major composition of glyph art
//! - Multi-line input with literal `\n` escapes
//! - Substring highlighting with ANSI color markers
//!
//! ```text
//!  _
//! | |__    __ _  _ __   _ __    ___  _ __
//! | '_ \  / _` || '_ \ | '_ \  / _ \| '__|
//! | |_) || (_| || | | || | | ||  __/| |
//! |_.__/  \__,_||_| |_||_| |_| \___||_|
//! ```

pub mod compose;
pub mod error;
pub mod glyph;
pub mod locate;
pub mod pipeline;

pub use compose::{render_line, render_line_colored, ColorMarker, ANSI_RESET};
pub use error::{CoreError, Result};
pub use glyph::{Glyph, GlyphSet, GLYPH_COUNT, GLYPH_HEIGHT};
pub use locate::{find_positions, PositionSet};
pub use pipeline::{decode_escapes, render, render_colored, render_with_positions};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience front end over a loaded glyph set
#[derive(Debug, Clone)]
pub struct BannerRenderer<'a> {
    glyphs: &'a GlyphSet,
    color: Option<ColorMarker>,
    highlight: Option<String>,
}

impl<'a> BannerRenderer<'a> {
    pub fn new(glyphs: &'a GlyphSet) -> Self {
        Self {
            glyphs,
            color: None,
            highlight: None,
        }
    }

    /// Color output with `marker`
    pub fn with_color(mut self, marker: ColorMarker) -> Self {
        self.color = Some(marker);
        self
    }

    /// Restrict coloring to occurrences of `substring`
    ///
    /// Without a color marker this has no effect.
    pub fn highlight(mut self, substring: impl Into<String>) -> Self {
        self.highlight = Some(substring.into());
        self
    }

    pub fn render(&self, text: &str) -> String {
        match &self.color {
            None => pipeline::render(text, self.glyphs),
            Some(marker) => {
                let substring = self.highlight.as_deref().unwrap_or("");
                pipeline::render_colored(text, self.glyphs, marker, substring)
            }
        }
    }
}
