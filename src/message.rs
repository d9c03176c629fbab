//! Messages applied to the application state, one at a time.

use crate::state::{GeoIpLocation, TunnelState};

/// Everything that can change the app, whatever its source.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// New location snapshot (`None` clears it).
    LocationUpdated(Option<GeoIpLocation>),
    /// New tunnel state.
    TunnelStateChanged(TunnelState),
    /// Expand or collapse the tunnel info.
    ToggleTunnelInfo,
    /// Empty the activity log.
    ClearLogs,
    /// A feed line could not be used.
    FeedError(String),
    /// The feed has no more events.
    FeedFinished,
    /// Leave the application.
    Quit,
}

/// Key binding hint shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}
