//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.playground/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaygroundConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub tab_width: Option<u16>,
}

/// Log verbosity, accepted both in TOML and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "playground.log";
pub const DEFAULT_TAB_WIDTH: u16 = 4;
/// Tab widths beyond this are clamped.
pub const MAX_TAB_WIDTH: u16 = 16;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    pub tab_width: u16,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.playground/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".playground").join("config.toml"))
}

/// Load config from `override_path`, or from `~/.playground/config.toml`.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing override path is an error: the user asked for that file.
pub fn load_config(override_path: Option<&Path>) -> Result<PlaygroundConfig, ConfigError> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(PlaygroundConfig::default());
            }
        },
    };

    if override_path.is_none() && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PlaygroundConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<PlaygroundConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Playground Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [logging]
# level = "debug"           # "off", "error", "warn", "info", "debug", "trace"
# file = "playground.log"   # Relative paths are resolved from the working directory

# [editor]
# tab_width = 4             # Spaces inserted by the Tab key
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_log_level` is from the CLI flag (None = not specified).
pub fn resolve(config: &PlaygroundConfig, cli_log_level: Option<LogLevel>) -> ResolvedConfig {
    let log_level = cli_log_level
        .or(config.logging.level)
        .unwrap_or_default();

    let log_file: PathBuf = config
        .logging
        .file
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_LOG_FILE)
        .into();

    let tab_width = match config.editor.tab_width {
        Some(0) => {
            warn!("editor.tab_width = 0 is not usable, falling back to {DEFAULT_TAB_WIDTH}");
            DEFAULT_TAB_WIDTH
        }
        Some(w) => w.min(MAX_TAB_WIDTH),
        None => DEFAULT_TAB_WIDTH,
    };

    ResolvedConfig {
        log_level,
        log_file,
        tab_width,
    }
}
