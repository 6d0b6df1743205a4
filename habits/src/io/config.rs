//! Optional configuration stored in `habits.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "habits.toml";

/// Habits configuration (TOML).
///
/// Missing fields fall back to defaults, so an absent file and an empty
/// file behave the same.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HabitsConfig {
    /// JSON file holding the habit collection.
    pub data_file: PathBuf,
}

impl Default for HabitsConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("habits.json"),
        }
    }
}

impl HabitsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(anyhow!("data_file must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `HabitsConfig::default()`.
pub fn load_config(path: &Path) -> Result<HabitsConfig> {
    if !path.exists() {
        let cfg = HabitsConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HabitsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
