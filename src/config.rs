//! Configuration file support for spinwheel.
//!
//! Configuration is loaded from `~/.config/spinwheel/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/spinwheel/config.toml
//! item_height = 2.0
//! visible_items = 5
//! haptics = true
//!
//! [[columns]]
//! name = "hours"
//! values = ["0", "1", "2", "3"]
//! unit = "h"
//! selected = 1
//!
//! [[columns]]
//! name = "minutes"
//! values = ["00", "15", "30", "45"]
//! unit = "min"
//! width = 2
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::engine::Tuning;
use crate::error::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per item slot
    pub item_height: f32,

    /// Items rendered to each side of the center (odd total window)
    pub visible_items: usize,

    /// Ring the terminal bell on boundary crossings
    pub haptics: bool,

    /// Release speed (rows/s) above which a drag flings
    pub fling_threshold: f32,

    /// Minimum milliseconds between live "changing" notifications
    pub emit_interval_ms: u64,

    /// Wheel columns, left to right
    pub columns: Vec<ColumnConfig>,
}

/// One wheel column.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConfig {
    /// Column label, shown above the wheel
    pub name: String,

    /// Item values, top to bottom
    pub values: Vec<String>,

    /// Unit label rendered after the value
    #[serde(default)]
    pub unit: Option<String>,

    /// Initially selected index
    #[serde(default)]
    pub selected: usize,

    /// Relative width against sibling columns
    #[serde(default = "default_column_width")]
    pub width: u16,
}

fn default_column_width() -> u16 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_height: 2.0,
            visible_items: 5,
            haptics: true,
            fling_threshold: 10.0,
            emit_interval_ms: 50,
            columns: default_columns(),
        }
    }
}

/// A duration picker: the demo surface when no config file exists.
fn default_columns() -> Vec<ColumnConfig> {
    vec![
        ColumnConfig {
            name: "hours".to_string(),
            values: (0..24).map(|h| h.to_string()).collect(),
            unit: Some("h".to_string()),
            selected: 8,
            width: 1,
        },
        ColumnConfig {
            name: "minutes".to_string(),
            values: (0..60).map(|m| format!("{:02}", m)).collect(),
            unit: Some("min".to_string()),
            selected: 30,
            width: 1,
        },
    ]
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` (from the CLI) a missing or broken file is a
    /// hard error. The default path is best-effort: missing or unparsable
    /// files fall back to defaults with a logged warning.
    pub fn load(path: Option<PathBuf>) -> ConfigResult<Self> {
        let config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::read(&path)?
            }
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    Self::default()
                } else {
                    match Self::read(&path) {
                        Ok(config) => config,
                        Err(e) => {
                            crate::log::log(&format!("Warning: {}", e));
                            Self::default()
                        }
                    }
                }
            }
        };
        Ok(config.sanitized())
    }

    fn read(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e.to_string()))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e.to_string()))
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spinwheel")
            .join("config.toml")
    }

    /// Repair out-of-contract values instead of failing: the picker must
    /// come up even on a sloppy config.
    fn sanitized(mut self) -> Self {
        if !(self.item_height > 0.0) {
            crate::log::log("Warning: item_height must be positive, using 2.0");
            self.item_height = 2.0;
        }
        if self.visible_items == 0 {
            self.visible_items = 5;
        }
        if self.visible_items % 2 == 0 {
            // The window is centered, so it has to be odd.
            self.visible_items += 1;
        }
        if self.emit_interval_ms == 0 {
            self.emit_interval_ms = 50;
        }
        for column in &mut self.columns {
            if column.width == 0 {
                column.width = 1;
            }
            if !column.values.is_empty() && column.selected >= column.values.len() {
                column.selected = column.values.len() - 1;
            }
        }
        self
    }

    /// Engine constants derived from this config.
    pub fn tuning(&self) -> Tuning {
        Tuning {
            fling_threshold: self.fling_threshold,
            min_emit_interval: Duration::from_millis(self.emit_interval_ms),
            ..Tuning::default()
        }
    }
}
