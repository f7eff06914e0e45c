use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::measurement::Base;
use crate::options::Field;

/// Default units per field (optional `[units]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDefaults {
    /// Unit for total size, e.g. "gigabyte" or "GB".
    #[serde(default)]
    pub total: Option<String>,
    /// Unit for the amount downloaded so far.
    #[serde(default)]
    pub downloaded: Option<String>,
    /// Unit for transfer speed, e.g. "kilobyte" (read as per second).
    #[serde(default)]
    pub speed: Option<String>,
}

/// Global configuration loaded from `~/.config/etacalc/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtacalcConfig {
    /// Prefix base: 2 (1024 steps) or 10 (1000 steps).
    #[serde(default)]
    pub base: Base,
    /// Width in cells of the text progress bar.
    #[serde(default = "default_progress_bar_width")]
    pub progress_bar_width: usize,
    /// Optional unit overrides; if missing, built-in defaults are used.
    #[serde(default)]
    pub units: Option<UnitDefaults>,
}

fn default_progress_bar_width() -> usize {
    40
}

impl Default for EtacalcConfig {
    fn default() -> Self {
        Self {
            base: Base::Ten,
            progress_bar_width: default_progress_bar_width(),
            units: None,
        }
    }
}

impl EtacalcConfig {
    /// Configured unit for `field`, or the field's built-in default.
    pub fn unit_for(&self, field: Field) -> &str {
        let configured = self.units.as_ref().and_then(|u| match field {
            Field::Total => u.total.as_deref(),
            Field::Downloaded => u.downloaded.as_deref(),
            Field::Speed => u.speed.as_deref(),
        });
        configured.unwrap_or_else(|| field.default_unit_name())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("etacalc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EtacalcConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<EtacalcConfig> {
    if !path.exists() {
        let default_cfg = EtacalcConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: EtacalcConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = EtacalcConfig::default();
        assert_eq!(cfg.base, Base::Ten);
        assert_eq!(cfg.progress_bar_width, 40);
        assert_eq!(cfg.unit_for(Field::Total), "gigabyte");
        assert_eq!(cfg.unit_for(Field::Downloaded), "megabyte");
        assert_eq!(cfg.unit_for(Field::Speed), "kilobyte");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = EtacalcConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: EtacalcConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base = 2
            progress_bar_width = 20

            [units]
            speed = "megabit"
        "#;
        let cfg: EtacalcConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base, Base::Two);
        assert_eq!(cfg.progress_bar_width, 20);
        assert_eq!(cfg.unit_for(Field::Speed), "megabit");
        assert_eq!(cfg.unit_for(Field::Total), "gigabyte");
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: EtacalcConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, EtacalcConfig::default());
    }

    #[test]
    fn config_toml_rejects_other_bases() {
        let err = toml::from_str::<EtacalcConfig>("base = 16").unwrap_err();
        assert!(err.to_string().contains("unsupported base"), "{err}");
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, EtacalcConfig::default());

        fs::write(&path, "base = 2\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.base, Base::Two);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base = \"two\"").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
