//! Retained state for the location panel.
//!
//! [`LocationInfo`] owns the last location, the last tunnel state and the
//! requested expansion. Every inbound event updates that triple and returns a
//! freshly composed [`DisplayState`]; nothing is patched incrementally.

use super::composer::{compose, toggle};
use super::labels::{LabelFormatter, Labels};
use super::projector::project;
use crate::state::{DisplayState, GeoIpLocation, TunnelState};

/// Location panel presenter.
#[derive(Debug, Clone)]
pub struct LocationInfo<L = Labels> {
    location: Option<GeoIpLocation>,
    state: TunnelState,
    expanded: bool,
    collapse_on_hide: bool,
    labels: L,
}

impl Default for LocationInfo<Labels> {
    fn default() -> Self {
        Self::new(Labels::default())
    }
}

impl<L: LabelFormatter> LocationInfo<L> {
    /// Starts disconnected, collapsed, with no location.
    pub fn new(labels: L) -> Self {
        Self {
            location: None,
            state: TunnelState::Disconnected,
            expanded: false,
            collapse_on_hide: false,
            labels,
        }
    }

    /// Reset the expansion whenever the tunnel info becomes hidden.
    ///
    /// Off by default: a reconnect reopens the panel if it was expanded.
    #[must_use]
    pub fn collapse_on_hide(mut self, enabled: bool) -> Self {
        self.collapse_on_hide = enabled;
        self
    }

    /// A new location snapshot arrived. `None` clears it.
    pub fn on_location_updated(&mut self, location: Option<GeoIpLocation>) -> DisplayState {
        self.location = location;
        self.display()
    }

    /// The tunnel moved to a new state.
    pub fn on_tunnel_state_changed(&mut self, state: TunnelState) -> DisplayState {
        if self.collapse_on_hide && !project(&state).info_visible {
            self.expanded = false;
        }
        self.state = state;
        self.display()
    }

    /// The user clicked the tunnel info area.
    pub fn on_toggle_clicked(&mut self) -> DisplayState {
        self.expanded = toggle(self.expanded);
        self.display()
    }

    /// Current snapshot, recomputed from the retained state.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        compose(
            self.location.as_ref(),
            &project(&self.state),
            self.expanded,
            &self.labels,
        )
    }

    #[must_use]
    pub fn tunnel_state(&self) -> &TunnelState {
        &self.state
    }

    /// Requested expansion, which may differ from what is rendered while hidden.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        ActionAfterDisconnect, Endpoint, PanelMode, TransportProtocol, TunnelEndpoint, TunnelType,
    };

    fn connected() -> TunnelState {
        TunnelState::Connected {
            endpoint: TunnelEndpoint::new(
                Endpoint::new("1.2.3.4:51820".parse().unwrap(), TransportProtocol::Udp),
                TunnelType::WireGuard,
            ),
        }
    }

    fn location() -> GeoIpLocation {
        GeoIpLocation {
            country: Some("Sweden".into()),
            city: Some("Gothenburg".into()),
            hostname: Some("se-got-wg-001".into()),
            ipv4: Some("185.213.154.1".parse().unwrap()),
            ipv6: Some("2a03:1b20::1".parse().unwrap()),
        }
    }

    fn assert_tunnel_text_blank(display: &DisplayState) {
        assert_eq!(display.protocol_text, "");
        assert_eq!(display.in_address_text, "");
        assert_eq!(display.out_address_text, "");
        assert_eq!(display.chevron_rotation_deg, 0);
    }

    #[test]
    fn test_initial_state_hidden() {
        let info = LocationInfo::default();
        let display = info.display();
        assert!(!display.info_visible);
        assert_eq!(display.mode(), PanelMode::Hidden);
        assert!(!info.is_expanded());
    }

    #[test]
    fn test_connect_expand_collapse_scenario() {
        let mut info = LocationInfo::default();
        info.on_location_updated(Some(location()));

        let display = info.on_tunnel_state_changed(connected());
        assert!(display.info_visible);
        assert!(display.chevron_visible);
        assert_eq!(display.mode(), PanelMode::Collapsed);
        assert_tunnel_text_blank(&display);

        let display = info.on_toggle_clicked();
        assert!(display.expanded);
        assert_eq!(display.chevron_rotation_deg, 180);
        assert_eq!(display.protocol_text, "WireGuard");
        assert_eq!(display.in_address_text, "1.2.3.4 : 51820 UDP");
        assert_eq!(display.out_address_text, "185.213.154.1 / 2a03:1b20::1");

        let display = info.on_toggle_clicked();
        assert_eq!(display.mode(), PanelMode::Collapsed);
        assert_tunnel_text_blank(&display);
    }

    #[test]
    fn test_toggle_while_hidden_only_flips_stored_flag() {
        let mut info = LocationInfo::default();
        let before = info.display();

        let after = info.on_toggle_clicked();
        assert!(info.is_expanded());
        assert_eq!(after, before);
        assert_eq!(after.mode(), PanelMode::Hidden);
    }

    #[test]
    fn test_expansion_survives_disconnect() {
        let mut info = LocationInfo::default();
        info.on_tunnel_state_changed(connected());
        info.on_toggle_clicked();

        let display = info.on_tunnel_state_changed(TunnelState::Disconnecting {
            after: ActionAfterDisconnect::Reconnect,
        });
        assert_eq!(display.mode(), PanelMode::Hidden);
        assert_tunnel_text_blank(&display);
        assert!(info.is_expanded());

        let display = info.on_tunnel_state_changed(connected());
        assert_eq!(display.mode(), PanelMode::Expanded);
    }

    #[test]
    fn test_collapse_on_hide_resets_expansion() {
        let mut info = LocationInfo::default().collapse_on_hide(true);
        info.on_tunnel_state_changed(connected());
        info.on_toggle_clicked();

        info.on_tunnel_state_changed(TunnelState::Disconnected);
        assert!(!info.is_expanded());

        let display = info.on_tunnel_state_changed(connected());
        assert_eq!(display.mode(), PanelMode::Collapsed);
    }

    #[test]
    fn test_collapse_on_hide_keeps_expansion_between_visible_states() {
        let mut info = LocationInfo::default().collapse_on_hide(true);
        info.on_tunnel_state_changed(TunnelState::Connecting { endpoint: None });
        info.on_toggle_clicked();

        let display = info.on_tunnel_state_changed(connected());
        assert_eq!(display.mode(), PanelMode::Expanded);
    }

    #[test]
    fn test_location_update_never_changes_mode() {
        let mut info = LocationInfo::default();
        info.on_tunnel_state_changed(connected());
        let mode = info.display().mode();

        let display = info.on_location_updated(Some(location()));
        assert_eq!(display.mode(), mode);
        assert_eq!(display.country_text, "Sweden");
        assert_tunnel_text_blank(&display);

        let display = info.on_location_updated(None);
        assert_eq!(display.mode(), mode);
        assert_eq!(display.country_text, "");
    }

    #[test]
    fn test_location_update_refreshes_out_address_when_expanded() {
        let mut info = LocationInfo::default();
        info.on_tunnel_state_changed(connected());
        info.on_toggle_clicked();
        assert_eq!(info.display().out_address_text, "");

        let display = info.on_location_updated(Some(GeoIpLocation {
            ipv4: Some("1.2.3.4".parse().unwrap()),
            ..GeoIpLocation::default()
        }));
        assert_eq!(display.out_address_text, "1.2.3.4");
    }

    #[test]
    fn test_error_state_hides_info() {
        let mut info = LocationInfo::default();
        info.on_tunnel_state_changed(connected());
        info.on_toggle_clicked();

        let display = info.on_tunnel_state_changed(TunnelState::Error {
            cause: "firewall policy failed".into(),
            blocking: true,
        });
        assert_eq!(display.mode(), PanelMode::Hidden);
        assert!(!display.chevron_visible);
    }
}
