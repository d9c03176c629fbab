//! User configuration loaded from `config.toml`.
//!
//! ```toml
//! tick_rate_ms = 250
//! demo_step_ms = 2000
//! collapse_on_hide = false
//! log_to_file = false
//!
//! [labels]
//! wireguard = "WireGuard"
//! in_address = "{host} : {port} {transport}"
//! out_address = "{address}"
//! ```

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants;
use crate::core::labels::Labels;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// UI refresh rate in milliseconds.
    pub tick_rate_ms: u64,
    /// Pause between steps of the built-in demo feed, in milliseconds.
    pub demo_step_ms: u64,
    /// Collapse the tunnel info whenever it becomes hidden.
    pub collapse_on_hide: bool,
    /// Mirror the activity log to `<config dir>/logs/tunnelview.log`.
    pub log_to_file: bool,
    /// Label text and address templates.
    pub labels: Labels,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: constants::DEFAULT_TICK_RATE,
            demo_step_ms: u64::try_from(constants::DEFAULT_DEMO_STEP.as_millis())
                .unwrap_or(u64::MAX),
            collapse_on_hide: false,
            log_to_file: false,
            labels: Labels::default(),
        }
    }
}

impl AppConfig {
    pub fn demo_step(&self) -> Duration {
        Duration::from_millis(self.demo_step_ms)
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file found; built-in defaults.
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `config.toml` in the app config
/// directory is used if present, otherwise defaults.
///
/// # Errors
///
/// Returns an error if an explicit file is missing or any file fails to parse.
pub fn load(explicit: Option<&Path>) -> Result<(AppConfig, ConfigSource)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(eyre!("config file not found: {}", path.display()));
        }
        return Ok((read(path)?, ConfigSource::File(path.to_path_buf())));
    }

    let Ok(config_dir) = crate::utils::get_app_config_dir() else {
        return Ok((AppConfig::default(), ConfigSource::Defaults));
    };
    let path = config_dir.join(constants::CONFIG_FILE_NAME);
    if path.is_file() {
        Ok((read(&path)?, ConfigSource::File(path)))
    } else {
        Ok((AppConfig::default(), ConfigSource::Defaults))
    }
}

fn read(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    parse(&content).wrap_err_with(|| format!("invalid config in {}", path.display()))
}

/// Parses configuration text.
///
/// # Errors
///
/// Returns an error for malformed TOML, unknown keys, or a zero tick rate or
/// demo step.
pub fn parse(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content)?;
    if config.tick_rate_ms == 0 {
        return Err(eyre!("tick_rate_ms must be greater than zero"));
    }
    if config.demo_step_ms == 0 {
        return Err(eyre!("demo_step_ms must be greater than zero"));
    }
    Ok(config)
}
