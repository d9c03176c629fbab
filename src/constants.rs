//! Application-wide constants.
//!
//! This module defines static configuration values used throughout
//! tunnelview: timing defaults, file names, glyphs and UI messages.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// Pause between demo feed steps.
pub const DEFAULT_DEMO_STEP: Duration = Duration::from_secs(2);

// === Path Configuration ===

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the logs subdirectory.
pub const LOGS_DIR_NAME: &str = "logs";
/// Name of the activity log file.
pub const LOG_FILE_NAME: &str = "tunnelview.log";
/// Environment variable overriding the config file path.
pub const CONFIG_ENV_VAR: &str = "TUNNELVIEW_CONFIG";

// === Activity Log ===

/// Entries kept in memory before the oldest are dropped.
pub const MAX_LOG_ENTRIES: usize = 500;

// === Glyphs ===

/// Chevron at 0 degrees.
pub const CHEVRON_DOWN: &str = "▾";
/// Chevron at 180 degrees.
pub const CHEVRON_UP: &str = "▴";

// === UI Messages ===

/// Startup message when falling back to the demo feed.
pub const MSG_FEED_DEMO: &str = "FEED: No feed file given, playing demo scenario";
/// Ready state message.
pub const MSG_READY: &str = "SUCCESS: Panel active. Press [Enter] to expand tunnel info.";
/// Feed exhausted.
pub const MSG_FEED_FINISHED: &str = "FEED: End of feed";
/// No data available placeholder.
pub const MSG_NO_DATA: &str = "---";

// === UI Labels & Titles ===

pub const TITLE_LOCATION: &str = " Location ";
pub const TITLE_TUNNEL_INFO: &str = "Tunnel info";
pub const TITLE_ACTIVITY: &str = " Activity ";
pub const LABEL_PROTOCOL: &str = "Protocol";
pub const LABEL_IN: &str = "In";
pub const LABEL_OUT: &str = "Out";
