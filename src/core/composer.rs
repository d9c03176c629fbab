//! Composition of the full [`DisplayState`] from the retained inputs.

use super::labels::LabelFormatter;
use super::projector::Projection;
use crate::state::{DisplayState, GeoIpLocation, CHEVRON_COLLAPSED_DEG, CHEVRON_EXPANDED_DEG};

/// Builds the panel snapshot for the given location, projection and expansion.
///
/// Pure and total. Location text always follows `location`; the tunnel
/// section is blank unless the info is both visible and expanded.
#[must_use]
pub fn compose(
    location: Option<&GeoIpLocation>,
    projection: &Projection,
    expanded: bool,
    labels: &dyn LabelFormatter,
) -> DisplayState {
    let text = |field: Option<&String>| field.cloned().unwrap_or_default();

    let mut display = DisplayState {
        country_text: text(location.and_then(|l| l.country.as_ref())),
        city_text: text(location.and_then(|l| l.city.as_ref())),
        hostname_text: text(location.and_then(|l| l.hostname.as_ref())),
        info_visible: projection.info_visible,
        expanded: false,
        chevron_visible: projection.info_visible,
        chevron_rotation_deg: CHEVRON_COLLAPSED_DEG,
        ..DisplayState::default()
    };

    if projection.info_visible && expanded {
        display.expanded = true;
        display.chevron_rotation_deg = CHEVRON_EXPANDED_DEG;
        display.protocol_text = labels.tunnel_protocol(projection.tunnel_type);
        display.in_address_text = projection
            .endpoint
            .map(|endpoint| {
                labels.in_address(
                    endpoint.address.ip(),
                    endpoint.address.port(),
                    endpoint.protocol,
                )
            })
            .unwrap_or_default();
        display.out_address_text = location
            .and_then(GeoIpLocation::public_address)
            .map(|address| labels.out_address(&address))
            .unwrap_or_default();
    }

    display
}

/// Flips the requested expansion.
#[must_use]
pub const fn toggle(expanded: bool) -> bool {
    !expanded
}
