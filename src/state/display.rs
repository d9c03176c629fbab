//! Fully resolved panel contents handed to the renderer.

use serde::Serialize;

/// Chevron rotation while the tunnel info is collapsed or hidden.
pub const CHEVRON_COLLAPSED_DEG: u16 = 0;
/// Chevron rotation while the tunnel info is expanded.
pub const CHEVRON_EXPANDED_DEG: u16 = 180;

/// Rendered mode of the tunnel info section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelMode {
    /// No tunnel info, no chevron.
    Hidden,
    /// Chevron shown, contents blank.
    Collapsed,
    /// Chevron flipped, protocol and addresses shown.
    Expanded,
}

/// Snapshot of every text field and visual flag of the location panel.
///
/// Recomputed from scratch after each inbound event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub country_text: String,
    pub city_text: String,
    pub hostname_text: String,
    pub info_visible: bool,
    /// Effective expansion; always false while `info_visible` is false.
    pub expanded: bool,
    pub chevron_visible: bool,
    pub chevron_rotation_deg: u16,
    pub protocol_text: String,
    pub in_address_text: String,
    pub out_address_text: String,
}

impl DisplayState {
    #[must_use]
    pub const fn mode(&self) -> PanelMode {
        match (self.info_visible, self.expanded) {
            (false, _) => PanelMode::Hidden,
            (true, false) => PanelMode::Collapsed,
            (true, true) => PanelMode::Expanded,
        }
    }
}
