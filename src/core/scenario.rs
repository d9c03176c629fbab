//! Built-in demo feed used when no feed file is given.

use std::net::SocketAddr;
use std::time::Duration;

use super::feed::FeedEvent;
use crate::state::{
    ActionAfterDisconnect, Endpoint, GeoIpLocation, TransportProtocol, TunnelEndpoint,
    TunnelState, TunnelType,
};

fn home_location() -> GeoIpLocation {
    GeoIpLocation {
        country: Some("Sweden".to_string()),
        city: Some("Stockholm".to_string()),
        hostname: None,
        ipv4: Some([198, 51, 100, 23].into()),
        ipv6: None,
    }
}

fn relay_location() -> GeoIpLocation {
    GeoIpLocation {
        country: Some("Sweden".to_string()),
        city: Some("Gothenburg".to_string()),
        hostname: Some("se-got-wg-001".to_string()),
        ipv4: Some([185, 213, 154, 68].into()),
        ipv6: Some([0x2a03, 0x1b20, 0x5, 0xf011, 0, 0, 0, 0x1f].into()),
    }
}

fn relay_endpoint() -> TunnelEndpoint {
    TunnelEndpoint::new(
        Endpoint::new(
            SocketAddr::from(([185, 213, 154, 66], 51820)),
            TransportProtocol::Udp,
        ),
        TunnelType::WireGuard,
    )
}

/// One pass of the demo: connect, expand, pick up the relay location, drop
/// the tunnel and reconnect.
#[must_use]
pub fn demo_script(step: Duration) -> Vec<FeedEvent> {
    let wait = FeedEvent::Wait {
        ms: u64::try_from(step.as_millis()).unwrap_or(u64::MAX),
    };
    let tunnel = |state| FeedEvent::TunnelStateChanged { state };
    let location = |location| FeedEvent::LocationUpdated {
        location: Some(location),
    };

    vec![
        tunnel(TunnelState::Disconnected),
        location(home_location()),
        wait.clone(),
        tunnel(TunnelState::Connecting { endpoint: None }),
        wait.clone(),
        tunnel(TunnelState::Connecting {
            endpoint: Some(relay_endpoint()),
        }),
        wait.clone(),
        tunnel(TunnelState::Connected {
            endpoint: relay_endpoint(),
        }),
        wait.clone(),
        FeedEvent::ToggleClicked,
        wait.clone(),
        location(relay_location()),
        wait.clone(),
        wait.clone(),
        tunnel(TunnelState::Disconnecting {
            after: ActionAfterDisconnect::Reconnect,
        }),
        wait.clone(),
        tunnel(TunnelState::Connected {
            endpoint: relay_endpoint(),
        }),
        wait.clone(),
        FeedEvent::ToggleClicked,
        wait.clone(),
        tunnel(TunnelState::Disconnected),
        location(home_location()),
        wait.clone(),
        wait,
    ]
}
