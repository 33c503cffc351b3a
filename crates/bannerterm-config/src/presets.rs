//! Banner presets and glyph file resolution

use crate::Config;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Built-in banner styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPreset {
    Standard,
    Shadow,
    Thinkertoy,
}

impl BannerPreset {
    pub fn all() -> &'static [BannerPreset] {
        &[
            BannerPreset::Standard,
            BannerPreset::Shadow,
            BannerPreset::Thinkertoy,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BannerPreset::Standard => "standard",
            BannerPreset::Shadow => "shadow",
            BannerPreset::Thinkertoy => "thinkertoy",
        }
    }

    /// Glyph file name inside a banner directory
    pub fn file_name(&self) -> &'static str {
        match self {
            BannerPreset::Standard => "standard.txt",
            BannerPreset::Shadow => "shadow.txt",
            BannerPreset::Thinkertoy => "thinkertoy.txt",
        }
    }
}

impl fmt::Display for BannerPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BannerPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BannerPreset::all()
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown banner preset '{}'", s))
    }
}

impl Config {
    /// Whether `name` is a built-in or config-defined banner
    pub fn is_banner(&self, name: &str) -> bool {
        self.banners.contains_key(name) || name.parse::<BannerPreset>().is_ok()
    }

    /// Every banner name, built-ins first
    pub fn banner_names(&self) -> Vec<String> {
        let mut names: Vec<String> = BannerPreset::all().iter().map(|p| p.to_string()).collect();
        for name in self.banners.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

/// Resolve a banner name to an existing glyph file
///
/// Config-defined banners win over built-ins of the same name. Built-ins are
/// searched for across `render.banner_dirs` in order.
pub fn resolve_banner(name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    if let Some(path) = config.banners.get(name) {
        anyhow::ensure!(
            path.is_file(),
            "banner '{}' points to {}, which does not exist",
            name,
            path.display()
        );
        tracing::debug!("Banner '{}' resolved from config: {}", name, path.display());
        return Ok(path.clone());
    }

    let preset: BannerPreset = name.parse().map_err(|_| {
        anyhow::anyhow!(
            "invalid banner '{}' (available banners: {})",
            name,
            config.banner_names().join(", ")
        )
    })?;

    for dir in &config.render.banner_dirs {
        let candidate = dir.join(preset.file_name());
        if candidate.is_file() {
            tracing::debug!("Banner '{}' resolved to {}", name, candidate.display());
            return Ok(candidate);
        }
    }

    let searched: Vec<String> = config
        .render
        .banner_dirs
        .iter()
        .map(|d| d.display().to_string())
        .collect();
    anyhow::bail!(
        "banner file {} not found (searched: {})",
        preset.file_name(),
        searched.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_with_dirs(dirs: Vec<PathBuf>) -> Config {
        let mut config = Config::default();
        config.render.banner_dirs = dirs;
        config
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("shadow".parse::<BannerPreset>().unwrap(), BannerPreset::Shadow);
        assert!("Shadow".parse::<BannerPreset>().is_err());
        assert!("comic".parse::<BannerPreset>().is_err());
    }

    #[test]
    fn test_preset_file_names() {
        for preset in BannerPreset::all() {
            assert_eq!(preset.file_name(), format!("{}.txt", preset.name()));
        }
    }

    #[test]
    fn test_resolve_first_existing_dir() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("shadow.txt"), "").unwrap();
        fs::write(first.path().join("standard.txt"), "").unwrap();
        fs::write(second.path().join("standard.txt"), "").unwrap();

        let config = config_with_dirs(vec![first.path().into(), second.path().into()]);
        assert_eq!(
            resolve_banner("standard", &config).unwrap(),
            first.path().join("standard.txt")
        );
        assert_eq!(
            resolve_banner("shadow", &config).unwrap(),
            second.path().join("shadow.txt")
        );
    }

    #[test]
    fn test_every_preset_ships() {
        let shipped = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../banners");
        let config = config_with_dirs(vec![shipped.clone()]);

        for preset in BannerPreset::all() {
            let path = resolve_banner(preset.name(), &config).unwrap();
            assert_eq!(path, shipped.join(preset.file_name()));
        }
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_dirs(vec![dir.path().into()]);

        let err = resolve_banner("thinkertoy", &config).unwrap_err().to_string();
        assert!(err.contains("thinkertoy.txt"));
        assert!(err.contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let config = config_with_dirs(Vec::new());
        let err = resolve_banner("comic", &config).unwrap_err().to_string();
        assert!(err.contains("comic"));
        assert!(err.contains("standard, shadow, thinkertoy"));
    }

    #[test]
    fn test_resolve_custom_banner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.txt");
        fs::write(&path, "").unwrap();

        let mut config = config_with_dirs(Vec::new());
        config.banners.insert("tiny".to_string(), path.clone());
        config.banners.insert("gone".to_string(), dir.path().join("gone.txt"));

        assert!(config.is_banner("tiny"));
        assert!(config.is_banner("standard"));
        assert!(!config.is_banner("comic"));
        assert_eq!(resolve_banner("tiny", &config).unwrap(), path);
        assert!(resolve_banner("gone", &config).is_err());
        assert_eq!(config.banner_names().last().unwrap(), "tiny");
    }
}
