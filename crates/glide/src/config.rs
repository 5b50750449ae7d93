//! Configuration file support for glide
//!
//! Config file location: `~/.config/glide/config.toml` (XDG_CONFIG_HOME)
//!
//! Example config:
//! ```toml
//! [scroll]
//! wheel_divisor = 7
//! line_count = 20
//! page_speed_factor = 3
//! line_speed_factor = 3
//! sensitivity = 40
//!
//! [view]
//! line_height = 16
//! column_width = 8
//! tick_rate = 16
//! line_numbers = true
//! scrollbar = true
//!
//! [keys]
//! u = "page-up"
//! d = "page-down"
//! ```

use glide_core::settings::{
    DEFAULT_LINE_COUNT, DEFAULT_SPEED_FACTOR, DEFAULT_WHEEL_DIVISOR,
};
use glide_core::{ScrollCommand, ScrollSettings};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Scroll behaviour
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Divisor of the adaptive wheel glide (1-30, higher is slower)
    pub wheel_divisor: u32,
    /// Lines covered by one line command
    pub line_count: u32,
    /// Page command speed, percent of the page per frame (1-20)
    pub page_speed_factor: u32,
    /// Line command speed, percent of the distance per frame (1-20)
    pub line_speed_factor: u32,
    /// Wheel sensitivity in percent
    pub sensitivity: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            wheel_divisor: DEFAULT_WHEEL_DIVISOR,
            line_count: DEFAULT_LINE_COUNT,
            page_speed_factor: DEFAULT_SPEED_FACTOR,
            line_speed_factor: DEFAULT_SPEED_FACTOR,
            sensitivity: 40.0,
        }
    }
}

impl ScrollConfig {
    /// Settings for the engine, out-of-range values clamped
    pub fn settings(&self) -> ScrollSettings {
        if let Err(e) = ScrollSettings::new(
            self.wheel_divisor,
            self.line_count,
            self.page_speed_factor,
            self.line_speed_factor,
        ) {
            tracing::warn!("Invalid scroll config, clamping: {}", e);
        }
        ScrollSettings::clamped(
            self.wheel_divisor,
            self.line_count,
            self.page_speed_factor,
            self.line_speed_factor,
        )
    }

    pub fn sensitivity(&self) -> f64 {
        if self.sensitivity.is_finite() && self.sensitivity > 0.0 {
            self.sensitivity
        } else {
            ScrollConfig::default().sensitivity
        }
    }
}

/// View configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Virtual pixels per text row
    pub line_height: u16,
    /// Virtual pixels per text column
    pub column_width: u16,
    /// Frame interval in milliseconds
    pub tick_rate: u64,
    /// Show line numbers
    pub line_numbers: bool,
    /// Show scrollbar
    pub scrollbar: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            line_height: 16,
            column_width: 8,
            tick_rate: 16,
            line_numbers: true,
            scrollbar: true,
        }
    }
}

impl ViewConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate.max(1))
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scroll: ScrollConfig,
    pub view: ViewConfig,
    /// Extra single-character bindings for scroll commands
    pub keys: HashMap<String, ScrollCommand>,
}

impl Config {
    /// Get all possible config file paths in priority order
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG_CONFIG_HOME (if set)
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("glide").join("config.toml"));
        }

        // 2. ~/.config/glide/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("glide").join("config.toml"));
        }

        // 3. Platform-specific config dir
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("glide").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    /// Get the first existing config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|p| p.exists())
    }

    /// Load config from `path`, or from the XDG path when `None`.
    /// Returns default config if the file doesn't exist or can't be read or parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).or_else(Self::config_path);
        path.and_then(|path| Self::load_from(&path)).unwrap_or_default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                e
            })
            .ok()?;
        Self::parse(&content)
            .map_err(|e| {
                tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                e
            })
            .ok()
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Key bindings with a single character key
    pub fn key_bindings(&self) -> HashMap<char, ScrollCommand> {
        self.keys
            .iter()
            .filter_map(|(key, cmd)| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, *cmd)),
                    _ => {
                        tracing::warn!("Ignoring key binding {:?}: expected one character", key);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Polls the config file's modification time and reloads it on change.
///
/// Without an explicit path every lookup location is re-checked on each
/// poll, so a config created while running is picked up.
#[derive(Debug)]
pub struct ConfigWatcher {
    candidates: Vec<PathBuf>,
    path: Option<PathBuf>,
    modified: Option<SystemTime>,
}

impl ConfigWatcher {
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::with_candidates(vec![path]),
            None => Self::with_candidates(Config::config_paths()),
        }
    }

    fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        let path = first_existing(&candidates);
        let modified = path.as_deref().and_then(modified_time);
        Self {
            candidates,
            path,
            modified,
        }
    }

    /// The config file currently in effect, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Return the reloaded config if the file changed since the last poll
    pub fn poll(&mut self) -> Option<Config> {
        let path = first_existing(&self.candidates);
        let modified = path.as_deref().and_then(modified_time);
        if path == self.path && modified == self.modified {
            return None;
        }
        self.path = path;
        self.modified = modified;

        match self.path.as_deref() {
            Some(path) => {
                tracing::info!("Config changed: {}", path.display());
                Some(Config::load_from(path).unwrap_or_default())
            }
            None => {
                tracing::info!("Config removed, using defaults");
                Some(Config::default())
            }
        }
    }
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.exists()).cloned()
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
