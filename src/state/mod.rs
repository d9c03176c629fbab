//! Domain value types shared by the core and the UI.

mod display;
mod location;
mod tunnel;

pub use display::{DisplayState, PanelMode, CHEVRON_COLLAPSED_DEG, CHEVRON_EXPANDED_DEG};
pub use location::GeoIpLocation;
pub use tunnel::{
    ActionAfterDisconnect, Endpoint, TransportProtocol, TunnelEndpoint, TunnelState, TunnelType,
};
