//! Core application state and logic.
//!
//! The [`App`] owns the location panel presenter, the last rendered
//! [`DisplayState`] and the activity log. Input from the terminal and from
//! the feed is turned into [`Message`]s and applied one at a time.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::constants;
use crate::core::LocationInfo;
use crate::message::Message;
use crate::state::{DisplayState, PanelMode};
use crate::utils;

/// Main application state container.
pub struct App {
    /// Flag indicating the application should exit.
    pub should_quit: bool,

    // === Panel ===
    /// Retained location/tunnel/expansion state.
    pub panel: LocationInfo,
    /// Snapshot produced by the last applied event.
    pub display: DisplayState,
    /// Screen area of the tunnel info section from the last draw.
    pub tunnel_info_area: Option<Rect>,

    // === Feed ===
    /// Human-readable name of the event source.
    pub feed_name: String,
    /// The feed has been fully consumed.
    pub feed_finished: bool,

    // === Activity Log ===
    /// Timestamped log lines, oldest first.
    pub logs: Vec<String>,
    log_file: Option<PathBuf>,
}

impl App {
    /// Create a new App from the loaded configuration.
    pub fn new(config: &AppConfig, feed_name: impl Into<String>) -> Self {
        let panel =
            LocationInfo::new(config.labels.clone()).collapse_on_hide(config.collapse_on_hide);
        let display = panel.display();

        let mut app = Self {
            should_quit: false,
            panel,
            display,
            tunnel_info_area: None,
            feed_name: feed_name.into(),
            feed_finished: false,
            logs: Vec::new(),
            log_file: None,
        };

        if config.log_to_file {
            match Self::prepare_log_file() {
                Ok(path) => {
                    app.log_file = Some(path.clone());
                    app.log(&format!("IO: Auto-logging to {}", path.display()));
                }
                Err(e) => app.log(&format!("ERROR: File logging disabled: {e:#}")),
            }
        }

        app.log(&format!(
            "INIT: {} v{} starting...",
            constants::APP_NAME,
            constants::APP_VERSION
        ));
        app.log(&format!("FEED: Reading events from {}", app.feed_name));
        app.log(constants::MSG_READY);
        app
    }

    fn prepare_log_file() -> color_eyre::Result<PathBuf> {
        let dir = utils::get_app_config_dir()?.join(constants::LOGS_DIR_NAME);
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join(constants::LOG_FILE_NAME))
    }

    /// Add a log message with timestamp.
    pub fn log(&mut self, message: &str) {
        let entry = format!("{} {message}", utils::format_local_time());

        if let Some(path) = &self.log_file {
            Self::append_to_log_file(path, &entry);
        }

        self.logs.push(entry);
        if self.logs.len() > constants::MAX_LOG_ENTRIES {
            let excess = self.logs.len() - constants::MAX_LOG_ENTRIES;
            self.logs.drain(..excess);
        }
    }

    fn append_to_log_file(path: &Path, entry: &str) {
        use std::io::Write;

        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            let _ = writeln!(file, "{entry}");
        }
    }

    /// Apply a single message and recompute the display.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::LocationUpdated(location) => {
                let line = match &location {
                    Some(location) => format!(
                        "LOCATION: {} ({})",
                        location.summary(),
                        location
                            .public_address()
                            .unwrap_or_else(|| constants::MSG_NO_DATA.to_string())
                    ),
                    None => "LOCATION: Cleared".to_string(),
                };
                self.display = self.panel.on_location_updated(location);
                self.log(&line);
            }
            Message::TunnelStateChanged(state) => {
                let line = format!("TUNNEL: {state}");
                self.display = self.panel.on_tunnel_state_changed(state);
                self.log(&line);
            }
            Message::ToggleTunnelInfo => {
                self.display = self.panel.on_toggle_clicked();
                let line = match self.display.mode() {
                    PanelMode::Expanded => "UI: Tunnel info expanded",
                    PanelMode::Collapsed => "UI: Tunnel info collapsed",
                    PanelMode::Hidden if self.panel.is_expanded() => {
                        "UI: Tunnel info hidden, will open expanded"
                    }
                    PanelMode::Hidden => "UI: Tunnel info hidden, will open collapsed",
                };
                self.log(line);
            }
            Message::ClearLogs => self.logs.clear(),
            Message::FeedError(error) => self.log(&format!("ERROR: {error}")),
            Message::FeedFinished => {
                self.feed_finished = true;
                self.log(constants::MSG_FEED_FINISHED);
            }
            Message::Quit => self.should_quit = true,
        }
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let message = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            KeyCode::Enter | KeyCode::Char(' ' | 't') => Some(Message::ToggleTunnelInfo),
            KeyCode::Char('c') => Some(Message::ClearLogs),
            _ => None,
        };

        if let Some(message) = message {
            self.handle_message(message);
        }
    }

    /// Handle mouse input: a left click on the tunnel info toggles it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let clicked = self
            .tunnel_info_area
            .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        if clicked {
            self.handle_message(Message::ToggleTunnelInfo);
        }
    }
}
