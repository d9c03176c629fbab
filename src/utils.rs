//! Small filesystem and time helpers.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::path::PathBuf;

use crate::constants;

/// Application config directory (`~/.config/tunnelview` on Linux).
///
/// # Errors
///
/// Returns an error if the platform has no config directory.
pub fn get_app_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(constants::APP_NAME))
        .ok_or_else(|| eyre!("could not determine the user config directory"))
}

/// Current local time as `HH:MM:SS`.
pub fn format_local_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
