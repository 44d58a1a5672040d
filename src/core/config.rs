//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.toolshelf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::filter::SortOrder;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Catalog file path or http(s) URL.
    pub catalog: Option<String>,
    /// Where favorites and the log file live.
    pub data_dir: Option<String>,
    pub default_sort: Option<SortOrder>,
    pub featured_count: Option<usize>,
    /// "error", "warn", "info", "debug" or "trace".
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CATALOG: &str = "tools.json";
pub const DEFAULT_FEATURED_COUNT: usize = 6;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog: String,
    pub data_dir: PathBuf,
    pub default_sort: SortOrder,
    pub featured_count: usize,
    pub log_level: log::LevelFilter,
    /// Problems found while resolving, logged by `main` once the logger is up.
    pub warnings: Vec<String>,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog: Option<String>,
    pub sort: Option<SortOrder>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.toolshelf`.
pub fn home_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".toolshelf"))
}

/// Returns the path to `~/.toolshelf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    home_data_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.toolshelf/config.toml`.
///
/// Runs before the logger exists, so nothing here logs: every problem comes
/// back as a `ConfigError` for `main` to report once logging is up.
pub fn load_config() -> Result<ShelfConfig, ConfigError> {
    let path = config_path().ok_or_else(|| {
        ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not determine home directory",
        ))
    })?;
    load_or_init_config(&path)
}

/// If `path` doesn't exist, writes a commented-out default there and
/// returns `ShelfConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_or_init_config(path: &Path) -> Result<ShelfConfig, ConfigError> {
    if !path.exists() {
        generate_default_config(path).map_err(ConfigError::Io)?;
        return Ok(ShelfConfig::default());
    }
    load_config_from(path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ShelfConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# toolshelf configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog = "tools.json"             # File path or http(s) URL. Env: TOOLSHELF_CATALOG
# data_dir = "/home/me/.toolshelf"   # Favorites + log file. Env: TOOLSHELF_DATA_DIR
# default_sort = "popular"           # "popular", "name" or "newest"
# featured_count = 6
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ShelfConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Catalog: CLI → env → config → default
    let catalog = cli
        .catalog
        .clone()
        .or_else(|| std::env::var("TOOLSHELF_CATALOG").ok())
        .or_else(|| config.general.catalog.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG.to_string());

    // Data dir: env → config → ~/.toolshelf → ./.toolshelf
    let data_dir = std::env::var("TOOLSHELF_DATA_DIR")
        .ok()
        .or_else(|| config.general.data_dir.clone())
        .map(PathBuf::from)
        .or_else(home_data_dir)
        .unwrap_or_else(|| PathBuf::from(".toolshelf"));

    let default_sort = cli
        .sort
        .or(config.general.default_sort)
        .unwrap_or_default();

    let mut warnings = Vec::new();
    let log_level = match parse_log_level(config.general.log_level.as_deref()) {
        Ok(level) => level,
        Err(raw) => {
            warnings.push(format!("Unknown log level '{raw}', using {DEFAULT_LOG_LEVEL}"));
            log::LevelFilter::Debug
        }
    };

    ResolvedConfig {
        catalog,
        data_dir,
        default_sort,
        featured_count: config
            .general
            .featured_count
            .unwrap_or(DEFAULT_FEATURED_COUNT),
        log_level,
        warnings,
    }
}

/// Parses a level name; the unrecognised name comes back as the error.
fn parse_log_level(value: Option<&str>) -> Result<log::LevelFilter, String> {
    let raw = value.unwrap_or(DEFAULT_LOG_LEVEL);
    raw.parse().map_err(|_| raw.to_string())
}
