//! Newline-delimited JSON event feed.
//!
//! Each non-empty line that does not start with `#` is one event:
//!
//! ```text
//! {"event":"location_updated","location":{"country":"Sweden","ipv4":"1.2.3.4"}}
//! {"event":"tunnel_state_changed","state":{"state":"connecting"}}
//! {"event":"toggle_clicked"}
//! {"event":"wait","ms":1500}
//! ```
//!
//! The worker replays a feed in a background thread and forwards the events
//! to the UI loop through an MPSC channel, sleeping on `wait` entries.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::event::Event;
use crate::message::Message;
use crate::state::{GeoIpLocation, TunnelState};

/// One entry of the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FeedEvent {
    /// New location snapshot; `null` or missing clears it.
    LocationUpdated {
        #[serde(default)]
        location: Option<GeoIpLocation>,
    },
    /// New tunnel state.
    TunnelStateChanged { state: TunnelState },
    /// User clicked the tunnel info.
    ToggleClicked,
    /// Pause before the next event. Ignored outside the TUI.
    Wait { ms: u64 },
}

impl FeedEvent {
    /// Converts to an app message. Pacing entries have none.
    #[must_use]
    pub fn into_message(self) -> Option<Message> {
        match self {
            FeedEvent::LocationUpdated { location } => Some(Message::LocationUpdated(location)),
            FeedEvent::TunnelStateChanged { state } => Some(Message::TunnelStateChanged(state)),
            FeedEvent::ToggleClicked => Some(Message::ToggleTunnelInfo),
            FeedEvent::Wait { .. } => None,
        }
    }
}

/// Parses one feed line. Blank and comment lines yield `None`.
///
/// # Errors
///
/// Returns an error naming the line number if the line is not a valid event.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<FeedEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .wrap_err_with(|| format!("invalid feed event on line {line_no}"))
}

/// Lazily reads feed events from a buffered reader.
pub fn read_feed<R: BufRead>(reader: R) -> impl Iterator<Item = Result<FeedEvent>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_no = index + 1;
            match line {
                Ok(line) => parse_line(&line, line_no).transpose(),
                Err(e) => Some(Err(eyre!(e).wrap_err(format!("failed to read line {line_no}")))),
            }
        })
}

/// Spawns a worker that forwards `events` into the UI event channel.
///
/// Bad entries are reported as [`Message::FeedError`] and skipped. The worker
/// stops when the events run out or the UI side hangs up.
pub fn spawn_feed_worker<I>(events: I, tx: Sender<Event>)
where
    I: IntoIterator<Item = Result<FeedEvent>> + Send + 'static,
    I::IntoIter: Send,
{
    thread::spawn(move || {
        for event in events {
            let message = match event {
                Ok(FeedEvent::Wait { ms }) => {
                    thread::sleep(Duration::from_millis(ms));
                    continue;
                }
                Ok(event) => match event.into_message() {
                    Some(message) => message,
                    None => continue,
                },
                Err(e) => Message::FeedError(format!("{e:#}")),
            };

            if tx.send(Event::Feed(message)).is_err() {
                return;
            }
        }
        let _ = tx.send(Event::Feed(Message::FeedFinished));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc;

    #[test]
    fn test_parse_toggle() {
        let event = parse_line(r#"{"event": "toggle_clicked"}"#, 1).unwrap();
        assert_eq!(event, Some(FeedEvent::ToggleClicked));
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("   ", 2).unwrap(), None);
        assert_eq!(parse_line("# connect", 3).unwrap(), None);
    }

    #[test]
    fn test_parse_null_location() {
        let event = parse_line(r#"{"event": "location_updated", "location": null}"#, 1).unwrap();
        assert_eq!(event, Some(FeedEvent::LocationUpdated { location: None }));
    }

    #[test]
    fn test_parse_tunnel_state() {
        let line = r#"{"event": "tunnel_state_changed", "state": {"state": "disconnected"}}"#;
        let event = parse_line(line, 1).unwrap();
        assert_eq!(
            event,
            Some(FeedEvent::TunnelStateChanged {
                state: TunnelState::Disconnected
            })
        );
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = parse_line(r#"{"event": "explode"}"#, 7).unwrap_err();
        assert!(format!("{err}").contains("line 7"));
    }

    #[test]
    fn test_read_feed_numbers_lines() {
        let input = "# header\n{\"event\":\"toggle_clicked\"}\n\nnot json\n";
        let results: Vec<_> = read_feed(Cursor::new(input)).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), &FeedEvent::ToggleClicked);
        let err = results[1].as_ref().unwrap_err();
        assert!(format!("{err}").contains("line 4"));
    }

    #[test]
    fn test_wait_has_no_message() {
        assert_eq!(FeedEvent::Wait { ms: 10 }.into_message(), None);
        assert_eq!(
            FeedEvent::ToggleClicked.into_message(),
            Some(Message::ToggleTunnelInfo)
        );
    }

    #[test]
    fn test_worker_forwards_in_order() {
        let (tx, rx) = mpsc::channel();
        let events = vec![
            Ok(FeedEvent::TunnelStateChanged {
                state: TunnelState::Connecting { endpoint: None },
            }),
            Ok(FeedEvent::Wait { ms: 1 }),
            Err(eyre!("bad line")),
            Ok(FeedEvent::ToggleClicked),
        ];
        spawn_feed_worker(events, tx);

        let received: Vec<Message> = rx
            .iter()
            .map(|event| match event {
                Event::Feed(message) => message,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();

        assert_eq!(
            received,
            vec![
                Message::TunnelStateChanged(TunnelState::Connecting { endpoint: None }),
                Message::FeedError("bad line".to_string()),
                Message::ToggleTunnelInfo,
                Message::FeedFinished,
            ]
        );
    }
}
