//! Named colors for substring highlighting
//!
//! Color names are case-insensitive. Besides the built-in names, `#RRGGBB`
//! maps to a 24-bit foreground sequence and the `[colors]` config table can
//! add or override names.

use bannerterm_core::ColorMarker;
use std::collections::BTreeMap;

/// Built-in color names and their ANSI foreground sequences
pub const BUILTIN_COLORS: &[(&str, &str)] = &[
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("orange", "\x1b[38;5;208m"),
    ("black", "\x1b[30m"),
];

/// Resolves color names to markers
#[derive(Debug, Clone, Default)]
pub struct Palette {
    custom: BTreeMap<String, String>,
}

impl Palette {
    pub fn new(custom: &BTreeMap<String, String>) -> Self {
        Self {
            custom: custom
                .iter()
                .map(|(name, code)| (name.to_lowercase(), code.clone()))
                .collect(),
        }
    }

    /// Look up a color by name or `#RRGGBB`
    pub fn lookup(&self, name: &str) -> Option<ColorMarker> {
        let name = name.to_lowercase();

        if let Some(code) = self.custom.get(&name) {
            return Some(ColorMarker::new(code.clone()));
        }
        if let Some((_, code)) = BUILTIN_COLORS.iter().find(|(n, _)| *n == name) {
            return Some(ColorMarker::new(*code));
        }

        let (r, g, b) = parse_hex(&name)?;
        Some(ColorMarker::new(format!("\x1b[38;2;{};{};{}m", r, g, b)))
    }

    /// Like [`Palette::lookup`] but fails with the list of valid names
    pub fn resolve(&self, name: &str) -> anyhow::Result<ColorMarker> {
        self.lookup(name).ok_or_else(|| {
            anyhow::anyhow!(
                "invalid color '{}' (available colors: {}, or #RRGGBB)",
                name,
                self.names().join(", ")
            )
        })
    }

    /// Built-in names followed by config-defined ones
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN_COLORS.iter().map(|(n, _)| n.to_string()).collect();
        for name in self.custom.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

/// Parse "#RRGGBB"
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
