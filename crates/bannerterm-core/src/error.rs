//! Error types for BannerTerm Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type for BannerTerm Core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Glyph file is too short to hold the block for `ch`
    #[error("invalid banner file: not enough lines for char {ch:?} (need {needed}, found {found})")]
    GlyphParse {
        ch: char,
        needed: usize,
        found: usize,
    },

    /// Glyph file could not be read
    #[error("failed to read banner file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
