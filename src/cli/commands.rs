//! Non-interactive commands.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::config::AppConfig;
use crate::core::feed::{self, FeedEvent};
use crate::core::labels::LabelFormatter;
use crate::core::scenario;
use crate::core::LocationInfo;
use crate::state::DisplayState;

/// Replays a feed and prints the final panel state.
///
/// # Errors
///
/// Returns an error if the feed cannot be read or contains an invalid line.
pub fn render(file: &Path, json: bool, config: &AppConfig) -> Result<()> {
    let display = if file == Path::new("-") {
        replay(io::stdin().lock(), config)?
    } else {
        let reader = File::open(file)
            .map(BufReader::new)
            .wrap_err_with(|| format!("failed to open feed {}", file.display()))?;
        replay(reader, config)?
    };

    let output = if json {
        serde_json::to_string_pretty(&display)? + "\n"
    } else {
        format_display(&display)
    };
    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}

/// Prints the demo scenario as NDJSON.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn demo(config: &AppConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for event in scenario::demo_script(config.demo_step()) {
        writeln!(stdout, "{}", serde_json::to_string(&event)?)?;
    }
    Ok(())
}

/// Applies every event of `reader` to a fresh panel, ignoring pacing.
///
/// # Errors
///
/// Stops at the first unreadable or invalid line.
pub fn replay<R: BufRead>(reader: R, config: &AppConfig) -> Result<DisplayState> {
    let mut info =
        LocationInfo::new(config.labels.clone()).collapse_on_hide(config.collapse_on_hide);
    for event in feed::read_feed(reader) {
        apply(&mut info, event?);
    }
    Ok(info.display())
}

fn apply<L: LabelFormatter>(info: &mut LocationInfo<L>, event: FeedEvent) {
    match event {
        FeedEvent::LocationUpdated { location } => {
            info.on_location_updated(location);
        }
        FeedEvent::TunnelStateChanged { state } => {
            info.on_tunnel_state_changed(state);
        }
        FeedEvent::ToggleClicked => {
            info.on_toggle_clicked();
        }
        FeedEvent::Wait { .. } => {}
    }
}

/// Labelled text rendering of a panel state.
pub fn format_display(display: &DisplayState) -> String {
    let mut out = String::new();
    let mut option = |name: &str, value: &dyn std::fmt::Display| {
        let _ = writeln!(out, "{:<18}{value}", format!("{name}:"));
    };

    option("Country", &display.country_text);
    option("City", &display.city_text);
    option("Hostname", &display.hostname_text);
    option("Mode", &format!("{:?}", display.mode()).to_lowercase());
    option("Chevron", &display.chevron_rotation_deg);
    option("Protocol", &display.protocol_text);
    option("In address", &display.in_address_text);
    option("Out address", &display.out_address_text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PanelMode;
    use std::io::Cursor;

    const CONNECT_AND_EXPAND: &str = r#"
# connect to a relay and open the tunnel info
{"event":"location_updated","location":{"country":"Sweden","city":"Gothenburg","ipv4":"1.2.3.4","ipv6":"::1"}}
{"event":"tunnel_state_changed","state":{"state":"connected","endpoint":{"address":"1.2.3.4:51820","protocol":"udp"}}}
{"event":"wait","ms":60000}
{"event":"toggle_clicked"}
"#;

    #[test]
    fn test_replay_connect_and_expand() {
        let display = replay(Cursor::new(CONNECT_AND_EXPAND), &AppConfig::default()).unwrap();
        assert_eq!(display.mode(), PanelMode::Expanded);
        assert_eq!(display.protocol_text, "WireGuard");
        assert_eq!(display.in_address_text, "1.2.3.4 : 51820 UDP");
        assert_eq!(display.out_address_text, "1.2.3.4 / ::1");
    }

    #[test]
    fn test_replay_stops_on_invalid_line() {
        let feed = "{\"event\":\"toggle_clicked\"}\n{\"event\":\n";
        let err = replay(Cursor::new(feed), &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_replay_with_collapse_on_hide() {
        let feed = format!(
            "{CONNECT_AND_EXPAND}\n{}\n{}\n",
            r#"{"event":"tunnel_state_changed","state":{"state":"disconnected"}}"#,
            r#"{"event":"tunnel_state_changed","state":{"state":"connecting"}}"#,
        );
        let config = AppConfig {
            collapse_on_hide: true,
            ..AppConfig::default()
        };
        let display = replay(Cursor::new(feed.clone()), &config).unwrap();
        assert_eq!(display.mode(), PanelMode::Collapsed);

        let display = replay(Cursor::new(feed), &AppConfig::default()).unwrap();
        assert_eq!(display.mode(), PanelMode::Expanded);
        assert_eq!(display.in_address_text, "");
    }

    #[test]
    fn test_demo_feed_round_trips_through_replay() {
        let mut ndjson = String::new();
        for event in scenario::demo_script(std::time::Duration::ZERO) {
            ndjson.push_str(&serde_json::to_string(&event).unwrap());
            ndjson.push('\n');
        }
        let display = replay(Cursor::new(ndjson), &AppConfig::default()).unwrap();
        assert_eq!(display.mode(), PanelMode::Hidden);
        assert_eq!(display.city_text, "Stockholm");
    }

    #[test]
    fn test_format_display() {
        let display = replay(Cursor::new(CONNECT_AND_EXPAND), &AppConfig::default()).unwrap();
        let text = format_display(&display);
        assert!(text.contains("Country:          Sweden\n"));
        assert!(text.contains("Mode:             expanded\n"));
        assert!(text.contains("Chevron:          180\n"));
        assert!(text.contains("In address:       1.2.3.4 : 51820 UDP\n"));
    }
}
