//! Line composer
//!
//! Lays out one logical line of text as [`GLYPH_HEIGHT`] rows of art,
//! optionally wrapping selected characters in color markers.

use crate::glyph::{GlyphSet, GLYPH_HEIGHT};
use crate::locate::PositionSet;

/// ANSI "reset all attributes" sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Start/reset pair wrapped around colored output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMarker {
    pub start: String,
    pub reset: String,
}

impl ColorMarker {
    /// Marker using the standard ANSI reset
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            reset: ANSI_RESET.to_string(),
        }
    }

    pub fn with_reset(start: impl Into<String>, reset: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            reset: reset.into(),
        }
    }
}

/// Render a single line of text
pub fn render_line(text: &str, glyphs: &GlyphSet) -> String {
    compose(text, glyphs, None)
}

/// Render a single line, coloring the characters at `positions`
///
/// Markers are emitted on every row of a colored character so each output
/// line is self-contained.
pub fn render_line_colored(
    text: &str,
    glyphs: &GlyphSet,
    marker: &ColorMarker,
    positions: &PositionSet,
) -> String {
    compose(text, glyphs, Some((marker, positions)))
}

fn compose(text: &str, glyphs: &GlyphSet, color: Option<(&ColorMarker, &PositionSet)>) -> String {
    // Unknown characters resolve to None and contribute nothing
    let columns: Vec<_> = text.chars().map(|ch| glyphs.get(ch)).collect();
    let mut out = String::new();

    for row in 0..GLYPH_HEIGHT {
        for (index, glyph) in columns.iter().enumerate() {
            let art = glyph.and_then(|g| g.row(row)).unwrap_or("");
            match color {
                Some((marker, positions)) if positions.contains(index) => {
                    out.push_str(&marker.start);
                    out.push_str(art);
                    out.push_str(&marker.reset);
                }
                _ => out.push_str(art),
            }
        }
        out.push('\n');
    }

    out
}
