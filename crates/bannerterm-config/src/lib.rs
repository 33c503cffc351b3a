//! # BannerTerm Configuration
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments
//! 2. Environment variables (`BANNERTERM_`, nested keys split on `__`)
//! 3. User config (~/.config/bannerterm/config.toml) or `--config <path>`
//! 4. Built-in defaults

pub mod colors;
pub mod presets;

pub use colors::{Palette, BUILTIN_COLORS};
pub use presets::{resolve_banner, BannerPreset};

use anyhow::Context;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "BANNERTERM_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "bannerterm", "BannerTerm")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/bannerterm"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering defaults
    pub render: RenderConfig,
    /// Extra banner presets: name -> glyph file
    pub banners: BTreeMap<String, PathBuf>,
    /// Extra color names: name -> ANSI start sequence
    pub colors: BTreeMap<String, String>,
}

/// Rendering defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Banner used when none is given on the command line
    pub default_banner: String,
    /// Directories searched, in order, for built-in banner files
    pub banner_dirs: Vec<PathBuf>,
    /// Color used when `--color` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_banner: BannerPreset::Standard.name().to_string(),
            banner_dirs: vec![PathBuf::from("banners"), config_dir().join("banners")],
            default_color: None,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// With `path` the file must exist. Without it the user config file is
    /// used when present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => {
                anyhow::ensure!(path.exists(), "config file {} not found", path.display());
                path.to_path_buf()
            }
            None => config_dir().join("config.toml"),
        };

        tracing::debug!("Loading configuration from {}", path.display());
        Self::figment(&path)
            .extract::<Config>()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Color palette with config-defined names layered over the built-ins
    pub fn palette(&self) -> Palette {
        Palette::new(&self.colors)
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
