//! Text pipeline
//!
//! Turns raw user input into finished banner output: decodes literal `\n`
//! escapes, splits the text into logical lines, renders each one and applies
//! the blank-line rules between them.

use crate::compose::{render_line, render_line_colored, ColorMarker};
use crate::glyph::GlyphSet;
use crate::locate::{find_positions, PositionSet};

/// Replace every literal backslash-`n` pair with a real line break
///
/// This is a plain scan, not an escape grammar: `\t`, `\\` and friends pass
/// through untouched.
pub fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'n') {
            chars.next();
            out.push('\n');
        } else {
            out.push(ch);
        }
    }

    out
}

/// What to emit for one logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentAction {
    /// Render the segment as a full block of art
    Render,
    /// Emit a single bare line break
    Gap,
    /// Emit nothing
    Skip,
}

/// Blank-line policy across the logical lines of one input
///
/// Empty lines in the middle always produce a gap. A trailing empty line
/// (input ending in a line break) produces a gap only once something has been
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLineState {
    #[default]
    NoContentYet,
    ContentSeen,
}

impl BlankLineState {
    /// Advance over one segment and decide what it emits
    pub fn advance(&mut self, segment_is_empty: bool, is_last: bool) -> SegmentAction {
        if !segment_is_empty {
            *self = BlankLineState::ContentSeen;
            return SegmentAction::Render;
        }

        match (is_last, *self) {
            (false, _) => SegmentAction::Gap,
            (true, BlankLineState::ContentSeen) => SegmentAction::Gap,
            (true, BlankLineState::NoContentYet) => SegmentAction::Skip,
        }
    }
}

/// Render raw input without color
pub fn render(raw: &str, glyphs: &GlyphSet) -> String {
    let text = decode_escapes(raw);
    render_decoded(&text, |segment, _| render_line(segment, glyphs))
}

/// Render raw input, coloring every occurrence of `substring`
///
/// Matching runs once against the whole decoded text, so the positions are
/// later split across logical lines. An empty substring colors everything.
pub fn render_colored(
    raw: &str,
    glyphs: &GlyphSet,
    marker: &ColorMarker,
    substring: &str,
) -> String {
    let text = decode_escapes(raw);
    let positions = find_positions(&text, substring);
    render_decoded_colored(&text, glyphs, marker, &positions)
}

/// Render raw input with caller-supplied positions into the decoded text
pub fn render_with_positions(
    raw: &str,
    glyphs: &GlyphSet,
    marker: &ColorMarker,
    positions: &PositionSet,
) -> String {
    let text = decode_escapes(raw);
    render_decoded_colored(&text, glyphs, marker, positions)
}

fn render_decoded_colored(
    text: &str,
    glyphs: &GlyphSet,
    marker: &ColorMarker,
    positions: &PositionSet,
) -> String {
    render_decoded(text, |segment, offset| {
        let local = positions.rebase(offset, segment.chars().count());
        render_line_colored(segment, glyphs, marker, &local)
    })
}

/// Shared multi-line driver
///
/// `render_segment` receives each non-empty logical line together with its
/// character offset into the decoded text.
fn render_decoded<F>(text: &str, mut render_segment: F) -> String
where
    F: FnMut(&str, usize) -> String,
{
    if text.is_empty() {
        return String::new();
    }
    if !text.contains('\n') {
        return render_segment(text, 0);
    }

    let segments: Vec<&str> = text.split('\n').collect();
    let last = segments.len() - 1;
    let mut state = BlankLineState::default();
    let mut offset = 0;
    let mut out = String::new();

    for (i, segment) in segments.iter().enumerate() {
        match state.advance(segment.is_empty(), i == last) {
            SegmentAction::Render => out.push_str(&render_segment(segment, offset)),
            SegmentAction::Gap => out.push('\n'),
            SegmentAction::Skip => {}
        }
        // +1 for the consumed separator
        offset += segment.chars().count() + 1;
    }

    out
}
