//! Configuration shared by the browser widgets and the standalone app.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::hotkeys::NavigatorHotkeys;
use crate::data::lasso::LassoStyle;
use crate::data::navigator::NavigatorSettings;
use crate::data::points::ColumnConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOME env var not set: {0}")]
    NoHome(#[from] std::env::VarError),
    #[error("Config file {0:?} does not exist")]
    Missing(PathBuf),
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Start with the lasso active (plot drag draws a lasso instead of panning).
    pub lasso: bool,
    /// Show the plot grid.
    pub grid: bool,
    /// Show the row detail panel.
    pub record_panel: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            lasso: true,
            grid: true,
            record_panel: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BrowserConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field       | Purpose |
/// |-------------|---------|
/// | `columns`   | Which row fields hold x, y and the row key |
/// | `lasso`     | Lasso colors and marker size |
/// | `navigator` | Pick tolerance, focus circle and pan margin |
/// | `hotkeys`   | Navigator keyboard shortcuts |
/// | `features`  | UI toggles |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Native window title.
    pub title: String,
    /// Initial inner window size in points.
    pub window_size: [f32; 2],
    pub columns: ColumnConfig,
    pub lasso: LassoStyle,
    pub navigator: NavigatorSettings,
    pub hotkeys: NavigatorHotkeys,
    pub features: FeatureFlags,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            title: "Point Browser".to_string(),
            window_size: [1200.0, 900.0],
            columns: ColumnConfig::default(),
            lasso: LassoStyle::default(),
            navigator: NavigatorSettings::default(),
            hotkeys: NavigatorHotkeys::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl BrowserConfig {
    /// `~/.pointbrowse/config.yaml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME")?;
        Ok(PathBuf::from(home).join(".pointbrowse").join("config.yaml"))
    }

    pub fn load_from(path: &Path) -> Result<BrowserConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&s)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let s = serde_yaml::to_string(self)?;
        let mut f = fs::File::create(path).map_err(io_err)?;
        f.write_all(s.as_bytes()).map_err(io_err)?;
        log::debug!("saved config to {path:?}");
        Ok(())
    }

    pub fn load_from_default_path() -> Result<BrowserConfig, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::default_path()?)
    }

    /// Load the default config file, falling back to defaults when the file
    /// is absent or unreadable.
    pub fn load_or_default() -> BrowserConfig {
        match Self::load_from_default_path() {
            Ok(cfg) => cfg,
            Err(ConfigError::Missing(_)) => BrowserConfig::default(),
            Err(e) => {
                log::warn!("Ignoring config: {e}");
                BrowserConfig::default()
            }
        }
    }
}
