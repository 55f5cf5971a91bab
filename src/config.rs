//! Docking configuration
//!
//! Stored in `~/.config/tabdock/config.yaml`. Every field is optional in the
//! file; missing fields take the defaults below.
//!
//! ```yaml
//! drag_threshold: 5.0
//! edge_band: 0.25
//! overlay_fraction: 0.5
//! splitter_width: 6.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::tab_strip::DRAG_THRESHOLD;
use crate::view::drop_zone::{EDGE_BAND, OVERLAY_FRACTION};
use crate::view::geometry::SPLITTER_WIDTH;

/// Tunables for drag recognition, drop zones and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Pixels a tab press must travel (either axis) before it becomes a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,

    /// Fraction of a group's width/height treated as an edge band
    #[serde(default = "default_edge_band")]
    pub edge_band: f32,

    /// Fraction of a group the drop overlay covers for edge zones
    #[serde(default = "default_overlay_fraction")]
    pub overlay_fraction: f32,

    /// Splitter thickness used by the built-in layout pass
    #[serde(default = "default_splitter_width")]
    pub splitter_width: f32,
}

fn default_drag_threshold() -> f32 {
    DRAG_THRESHOLD
}

fn default_edge_band() -> f32 {
    EDGE_BAND
}

fn default_overlay_fraction() -> f32 {
    OVERLAY_FRACTION
}

fn default_splitter_width() -> f32 {
    SPLITTER_WIDTH
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            drag_threshold: default_drag_threshold(),
            edge_band: default_edge_band(),
            overlay_fraction: default_overlay_fraction(),
            splitter_width: default_splitter_width(),
        }
    }
}

impl DockConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {:#}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML, replacing out-of-range values with defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("invalid dock config")?;
        Ok(config.sanitized())
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace values that would break zone classification or layout
    pub fn sanitized(mut self) -> Self {
        if !(self.drag_threshold.is_finite() && self.drag_threshold >= 0.0) {
            tracing::warn!("drag_threshold {} out of range, using default", self.drag_threshold);
            self.drag_threshold = default_drag_threshold();
        }
        // Bands wider than half would overlap each other
        if !(self.edge_band > 0.0 && self.edge_band <= 0.5) {
            tracing::warn!("edge_band {} out of range, using default", self.edge_band);
            self.edge_band = default_edge_band();
        }
        if !(self.overlay_fraction > 0.0 && self.overlay_fraction <= 1.0) {
            tracing::warn!(
                "overlay_fraction {} out of range, using default",
                self.overlay_fraction
            );
            self.overlay_fraction = default_overlay_fraction();
        }
        if !(self.splitter_width.is_finite() && self.splitter_width >= 0.0) {
            tracing::warn!("splitter_width {} out of range, using default", self.splitter_width);
            self.splitter_width = default_splitter_width();
        }
        self
    }
}
