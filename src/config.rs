//! Configuration file handling.
//!
//! The config lives at `<config dir>/adbar/config.toml` unless `ADBAR_CONFIG`
//! points elsewhere. Every field has a default, so a missing file or a file
//! with only some sections is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::player::{PlaybackClock, ProgressProjector, DEFAULT_POSITION_THRESHOLD_MS};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ADBAR_CONFIG";

/// Columns taken by padding and the time display next to the terminal bar.
const BAR_CHROME_COLS: usize = 14;

/// Errors that can occur while loading or saving the config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub track: TrackConfig,
    pub clock: ClockConfig,
    pub bar: BarConfig,
}

/// Progress track geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Width of the track in pixels
    pub width_px: u32,
    /// Limit projected offsets to the track
    pub clamp: bool,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            width_px: 960,
            clamp: true,
        }
    }
}

/// Position throttling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Minimum distance between accepted position updates
    pub position_threshold_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            position_threshold_ms: DEFAULT_POSITION_THRESHOLD_MS,
        }
    }
}

/// Terminal progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Bar width in columns; unset means "fit the terminal"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    /// Use ANSI colors (NO_COLOR always wins)
    pub color: bool,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: None,
            color: true,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("adbar").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config, falling back to defaults if the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track.width_px == 0 {
            return Err(ConfigError::Invalid(
                "track.width_px must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn projector(&self) -> ProgressProjector {
        ProgressProjector::new(self.track.width_px, self.track.clamp)
    }

    pub fn clock(&self) -> PlaybackClock {
        PlaybackClock::new(self.clock.position_threshold_ms)
    }

    /// Width of the terminal bar in columns.
    ///
    /// Uses the configured width, otherwise the terminal width minus the
    /// time display, otherwise 80 columns.
    pub fn bar_width(&self) -> usize {
        if let Some(width) = self.bar.width {
            return usize::from(width).max(1);
        }
        terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| usize::from(w))
            .unwrap_or(80 + BAR_CHROME_COLS)
            .saturating_sub(BAR_CHROME_COLS)
            .max(1)
    }

    /// Whether colored output is wanted, honoring `NO_COLOR`.
    pub fn use_color(&self) -> bool {
        self.bar.color
            && std::env::var_os("NO_COLOR").is_none()
            && atty::is(atty::Stream::Stdout)
    }
}
