//! Positional argument grammar
//!
//! ```text
//! bannerterm [--color=<color>] [--output=<file>] [SUBSTRING] TEXT [BANNER]
//! ```
//!
//! SUBSTRING is only accepted together with `--color`. With two values the
//! second one is taken as a banner when it names one.

use bannerterm_config::Config;
use bannerterm_core::{render, render_colored, ColorMarker, GlyphSet};
use thiserror::Error;

/// Printed on any usage error
pub const USAGE: &str = "Usage: bannerterm [OPTION] [STRING] [BANNER]\n\nEX: bannerterm --output=<fileName.txt> something standard";

/// Argument combinations the grammar rejects
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing text")]
    MissingText,
    #[error("unknown banner '{0}'")]
    UnknownBanner(String),
    #[error("a substring requires --color")]
    SubstringWithoutColor,
    #[error("too many arguments ({0})")]
    TooManyArguments(usize),
}

/// What to render, after interpreting the positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    /// `None` when no substring was given, which colors everything
    pub substring: Option<String>,
    pub banner: String,
}

impl RenderRequest {
    pub fn from_positional(
        values: &[String],
        colored: bool,
        config: &Config,
    ) -> Result<Self, UsageError> {
        let default_banner = || config.render.default_banner.clone();

        match values {
            [] => Err(UsageError::MissingText),
            [text] => Ok(Self {
                text: text.clone(),
                substring: None,
                banner: default_banner(),
            }),
            [text, banner] if config.is_banner(banner) => Ok(Self {
                text: text.clone(),
                substring: None,
                banner: banner.clone(),
            }),
            [substring, text] if colored => Ok(Self {
                text: text.clone(),
                substring: Some(substring.clone()),
                banner: default_banner(),
            }),
            [_, banner] => Err(UsageError::UnknownBanner(banner.clone())),
            [substring, text, banner] if colored => Ok(Self {
                text: text.clone(),
                substring: Some(substring.clone()),
                banner: banner.clone(),
            }),
            [_, _, _] => Err(UsageError::SubstringWithoutColor),
            _ => Err(UsageError::TooManyArguments(values.len())),
        }
    }

    /// Render with the coloring rules of the command line
    ///
    /// Without a substring the whole text is colored. An explicitly empty
    /// substring disables coloring.
    pub fn render(&self, glyphs: &GlyphSet, marker: Option<&ColorMarker>) -> String {
        match (marker, self.substring.as_deref()) {
            (None, _) => render(&self.text, glyphs),
            (Some(_), Some("")) => {
                tracing::warn!("Empty substring provided, rendering without color");
                render(&self.text, glyphs)
            }
            (Some(marker), substring) => {
                render_colored(&self.text, glyphs, marker, substring.unwrap_or(""))
            }
        }
    }
}
