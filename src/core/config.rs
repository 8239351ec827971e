//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.profile-card/config.toml` unless `PROFILE_CARD_CONFIG`
//! or `--config` point elsewhere. If the default file is missing on first
//! run, a commented-out template is generated so users can discover all
//! options. A config with `[[users]]` entries replaces the built-in
//! directory.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::directory::{Directory, DirectoryError};
use crate::core::user::User;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileCardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Title shown in the app bar on the list screen.
    pub title: Option<String>,
    /// "off", "error", "warn", "info", "debug" or "trace".
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Home";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const CONFIG_ENV_VAR: &str = "PROFILE_CARD_CONFIG";
pub const LOG_LEVEL_ENV_VAR: &str = "PROFILE_CARD_LOG";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub log_level: LevelFilter,
    pub directory: Directory,
}

impl ResolvedConfig {
    /// Built-in directory plus whatever settings could still be read. Used
    /// when the config file fails to load or its users are rejected.
    pub fn fallback(cli_log_level: Option<LevelFilter>, config: Option<&ProfileCardConfig>) -> Self {
        Self {
            title: config
                .and_then(|c| c.general.title.clone())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            log_level: log_level(cli_log_level, config),
            directory: Directory::builtin(),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
            directory: Directory::builtin(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Directory(DirectoryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Directory(e) => write!(f, "config users error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<DirectoryError> for ConfigError {
    fn from(e: DirectoryError) -> Self {
        ConfigError::Directory(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.profile-card/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".profile-card").join("config.toml"))
}

/// Pick the config path: CLI → env → default.
pub fn config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    config_path_with(cli_path, std::env::var_os(CONFIG_ENV_VAR))
}

/// `config_path` with the `PROFILE_CARD_CONFIG` value passed in.
pub fn config_path_with(cli_path: Option<&Path>, env_path: Option<OsString>) -> Option<PathBuf> {
    cli_path
        .map(Path::to_path_buf)
        .or_else(|| env_path.map(PathBuf::from))
        .or_else(default_config_path)
}

/// Load config from the resolved path.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file (CLI or env) is an I/O error.
pub fn load_config(cli_path: Option<&Path>) -> Result<ProfileCardConfig, ConfigError> {
    load_config_with(cli_path, std::env::var_os(CONFIG_ENV_VAR))
}

/// `load_config` with the `PROFILE_CARD_CONFIG` value passed in.
pub fn load_config_with(
    cli_path: Option<&Path>,
    env_path: Option<OsString>,
) -> Result<ProfileCardConfig, ConfigError> {
    let explicit = cli_path.is_some() || env_path.is_some();
    let path = match config_path_with(cli_path, env_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ProfileCardConfig::default());
        }
    };

    if !explicit && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ProfileCardConfig::default());
    }

    load_config_from(&path)
}

/// Read and parse a specific config file.
pub fn load_config_from(path: &Path) -> Result<ProfileCardConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ProfileCardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Profile Card Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Home"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# Listing any users replaces the built-in directory. Ids must be unique.
# [[users]]
# id = 0
# name = "Aang"
# picture_url = "https://randomuser.me/api/portraits/men/1.jpg"
# status = true

# [[users]]
# id = 1
# name = "Korra"
# picture_url = "https://randomuser.me/api/portraits/women/2.jpg"
# status = false
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_log_level` comes from the `--log-level` flag (None = not specified).
/// Fails only when the configured users contain duplicate ids.
pub fn resolve(
    config: &ProfileCardConfig,
    cli_log_level: Option<LevelFilter>,
) -> Result<ResolvedConfig, ConfigError> {
    let directory = if config.users.is_empty() {
        Directory::builtin()
    } else {
        Directory::new(config.users.clone())?
    };

    Ok(ResolvedConfig {
        directory,
        ..ResolvedConfig::fallback(cli_log_level, Some(config))
    })
}

/// Level to use before the config file is read: CLI → env → default.
/// Unknown env values are reported later, by `resolve`.
pub fn startup_log_level(cli_log_level: Option<LevelFilter>) -> LevelFilter {
    cli_log_level
        .or_else(|| {
            std::env::var(LOG_LEVEL_ENV_VAR)
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Log level: CLI → env → config → default.
pub fn log_level(
    cli_log_level: Option<LevelFilter>,
    config: Option<&ProfileCardConfig>,
) -> LevelFilter {
    pick_log_level(
        cli_log_level,
        std::env::var(LOG_LEVEL_ENV_VAR).ok().as_deref(),
        config.and_then(|c| c.general.log_level.as_deref()),
    )
}

/// Every supplied level is parsed, so an unknown one is warned about even
/// when a higher source wins.
fn pick_log_level(
    cli: Option<LevelFilter>,
    env: Option<&str>,
    config: Option<&str>,
) -> LevelFilter {
    let env = env.and_then(parse_level);
    let config = config.and_then(parse_level);
    cli.or(env).or(config).unwrap_or(DEFAULT_LOG_LEVEL)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level '{}'", s);
            None
        }
    }
}
