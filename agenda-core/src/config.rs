use crate::labels::{LabelKey, LabelSource};
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Optional user configuration.
///
/// The calendar core itself needs no configuration; the file only carries
/// label overrides. Every field is optional and a missing file falls back
/// to an empty config, so the built-in English labels apply.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `[labels]` overrides, keyed by the kebab-case [`LabelKey`] names.
    pub labels: HashMap<LabelKey, String>,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    /// Optional table:
    /// [labels]
    /// previous-week = "Semana Anterior"
    /// month-header = "{month} de {year}"
    labels: Option<HashMap<String, String>>,
}

impl Config {
    /// Load config from disk (first XDG path, then native), falling back to
    /// an empty config when no file exists.
    pub fn load() -> Result<Self> {
        for path in Self::config_file_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load from an explicit path. Unlike [`Config::load`], a missing or
    /// malformed file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("agenda")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("agenda").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Parse a TOML string into a `Config`. Label names that match no
    /// [`LabelKey`] are skipped rather than rejected.
    fn parse_file(s: &str) -> Result<Self> {
        let file_config = toml::from_str::<FileConfig>(s)?;
        let mut labels = HashMap::new();
        if let Some(map) = file_config.labels {
            for (name, text) in map {
                if let Ok(key) = LabelKey::from_str(&name) {
                    labels.insert(key, text);
                }
            }
        }
        Ok(Self { labels })
    }
}

impl LabelSource for Config {
    fn lookup(&self, key: LabelKey) -> Option<String> {
        self.labels.get(&key).cloned()
    }
}
