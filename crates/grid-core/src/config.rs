// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves breakpoints, default width and overlay settings from TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{ColumnSpan, GridConfig, OverlayColors};

/// Margin, gutter and column count used from `min_width` upwards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: f32,
    pub horizontal_margin: f32,
    pub gutter_width: f32,
    pub columns: u32,
}

impl Breakpoint {
    /// Phones (< 600)
    pub const COMPACT: Self = Self {
        min_width: 0.0,
        horizontal_margin: 16.0,
        gutter_width: 16.0,
        columns: 4,
    };

    /// Small tablets and foldables (600 - 839)
    pub const MEDIUM: Self = Self {
        min_width: 600.0,
        horizontal_margin: 32.0,
        gutter_width: 24.0,
        columns: 8,
    };

    /// Tablets and desktop (>= 840)
    pub const EXPANDED: Self = Self {
        min_width: 840.0,
        horizontal_margin: 32.0,
        gutter_width: 24.0,
        columns: 12,
    };

    pub fn presets() -> Vec<Breakpoint> {
        vec![Self::COMPACT, Self::MEDIUM, Self::EXPANDED]
    }

    /// Grid this breakpoint produces for a layout of `width`
    pub fn grid(&self, width: f32) -> GridConfig {
        GridConfig::new(width, self.horizontal_margin, self.gutter_width, self.columns)
    }
}

/// Debug overlay settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Draw margin and gutter stripes over the content
    pub enabled: bool,
    /// Draw a thin border along each stripe edge
    pub show_border: bool,
    pub colors: OverlayColors,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            show_border: true,
            colors: OverlayColors::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport width used when none is given
    pub window_width: f32,

    /// Columns taken by the centered pane
    pub center_span: ColumnSpan,

    /// Grid parameters by minimum viewport width
    pub breakpoints: Vec<Breakpoint>,

    pub overlay: OverlaySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 360.0,
            center_span: ColumnSpan::MatchParent,
            breakpoints: Breakpoint::presets(),
            overlay: OverlaySettings::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Breakpoint at width {min_width} has no columns")]
    InvalidBreakpoint { min_width: f32 },
}

impl Config {
    /// Get the default config file path (~/.config/responsive-grid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("responsive-grid").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| match Self::load(&path) {
                Ok(config) => Some(config),
                Err(ConfigError::ReadError(_)) => None,
                Err(e) => {
                    tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }

    /// Every breakpoint needs at least one column
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.breakpoints.iter().find(|bp| bp.columns == 0) {
            Some(bp) => Err(ConfigError::InvalidBreakpoint {
                min_width: bp.min_width,
            }),
            None => Ok(()),
        }
    }

    /// Breakpoint with the largest `min_width` not above `width`
    pub fn breakpoint_for(&self, width: f32) -> Breakpoint {
        self.breakpoints
            .iter()
            .filter(|bp| bp.min_width <= width)
            .max_by(|a, b| a.min_width.total_cmp(&b.min_width))
            .or_else(|| self.breakpoints.first())
            .copied()
            .unwrap_or(Breakpoint::COMPACT)
    }

    /// Root grid for a viewport of `width`
    pub fn root_grid(&self, width: f32) -> GridConfig {
        self.breakpoint_for(width).grid(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_breakpoint_by_width() {
        let config = Config::default();
        assert_eq!(config.breakpoint_for(360.0), Breakpoint::COMPACT);
        assert_eq!(config.breakpoint_for(600.0), Breakpoint::MEDIUM);
        assert_eq!(config.breakpoint_for(839.5), Breakpoint::MEDIUM);
        assert_eq!(config.breakpoint_for(1920.0), Breakpoint::EXPANDED);
    }

    #[test]
    fn unordered_breakpoints_still_resolve() {
        let config = Config {
            breakpoints: vec![Breakpoint::EXPANDED, Breakpoint::COMPACT, Breakpoint::MEDIUM],
            ..Config::default()
        };
        assert_eq!(config.breakpoint_for(700.0), Breakpoint::MEDIUM);
    }

    #[test]
    fn width_below_every_breakpoint_uses_first() {
        let config = Config {
            breakpoints: vec![Breakpoint::MEDIUM, Breakpoint::EXPANDED],
            ..Config::default()
        };
        assert_eq!(config.breakpoint_for(320.0), Breakpoint::MEDIUM);

        let empty = Config {
            breakpoints: Vec::new(),
            ..Config::default()
        };
        assert_eq!(empty.breakpoint_for(320.0), Breakpoint::COMPACT);
    }

    #[test]
    fn root_grid_uses_breakpoint_values() {
        let grid = Config::default().root_grid(1000.0);
        assert_eq!(grid.total_columns, 12);
        assert_eq!(grid.horizontal_margin, 32.0);
        assert_eq!(grid.gutter_width, 24.0);
        assert_eq!(grid.layout_width, 1000.0);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            window_width = 720.0
            center_span = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.window_width, 720.0);
        assert_eq!(config.center_span, ColumnSpan::columns(6).unwrap());
        assert_eq!(config.breakpoints, Breakpoint::presets());
        assert!(!config.overlay.enabled);
    }

    #[test]
    fn zero_column_breakpoint_is_rejected() {
        let path = std::env::temp_dir().join("responsive_grid_zero_columns.toml");
        std::fs::write(
            &path,
            r#"
            [[breakpoints]]
            min_width = 0.0
            horizontal_margin = 16.0
            gutter_width = 16.0
            columns = 0
            "#,
        )
        .unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::InvalidBreakpoint { .. })));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let config = Config {
            window_width: 1024.0,
            center_span: ColumnSpan::columns(8).unwrap(),
            ..Config::default()
        };

        let path = std::env::temp_dir()
            .join("responsive_grid_test")
            .join("config.toml");
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.window_width, 1024.0);
        assert_eq!(loaded.center_span, config.center_span);
        assert_eq!(loaded.breakpoints, config.breakpoints);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("responsive-grid/config.toml"));
        }
    }
}
