//! Classification of tunnel states into what the info panel needs.

use crate::state::{Endpoint, TunnelState, TunnelType};

/// Endpoint and visibility derived from a [`TunnelState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Projection {
    /// Relay endpoint, when one is known.
    pub endpoint: Option<Endpoint>,
    /// Tunnel protocol family in use.
    pub tunnel_type: TunnelType,
    /// Whether the tunnel info section is shown at all.
    pub info_visible: bool,
}

/// Projects a tunnel state onto `{ endpoint, info_visible }`.
///
/// `Connecting` stays visible even without an endpoint so the panel can show
/// its placeholder. Every other non-connected state hides the info.
#[must_use]
pub fn project(state: &TunnelState) -> Projection {
    match state {
        TunnelState::Connecting { endpoint } => Projection {
            endpoint: endpoint.map(|e| e.endpoint),
            tunnel_type: endpoint.map(|e| e.tunnel_type).unwrap_or_default(),
            info_visible: true,
        },
        TunnelState::Connected { endpoint } => Projection {
            endpoint: Some(endpoint.endpoint),
            tunnel_type: endpoint.tunnel_type,
            info_visible: true,
        },
        // No tunnel info.
        TunnelState::Disconnected
        | TunnelState::Disconnecting { .. }
        | TunnelState::Error { .. } => Projection::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActionAfterDisconnect, TransportProtocol, TunnelEndpoint};

    fn endpoint() -> TunnelEndpoint {
        TunnelEndpoint::new(
            Endpoint::new("1.2.3.4:51820".parse().unwrap(), TransportProtocol::Udp),
            TunnelType::WireGuard,
        )
    }

    #[test]
    fn test_hidden_states() {
        let states = [
            TunnelState::Disconnected,
            TunnelState::Disconnecting {
                after: ActionAfterDisconnect::Nothing,
            },
            TunnelState::Disconnecting {
                after: ActionAfterDisconnect::Reconnect,
            },
            TunnelState::Error {
                cause: "no route".into(),
                blocking: true,
            },
        ];
        for state in &states {
            let projection = project(state);
            assert!(!projection.info_visible, "{state:?} should hide info");
            assert_eq!(projection.endpoint, None);
        }
    }

    #[test]
    fn test_connecting_without_endpoint() {
        let projection = project(&TunnelState::Connecting { endpoint: None });
        assert!(projection.info_visible);
        assert_eq!(projection.endpoint, None);
        assert_eq!(projection.tunnel_type, TunnelType::WireGuard);
    }

    #[test]
    fn test_connecting_with_endpoint() {
        let projection = project(&TunnelState::Connecting {
            endpoint: Some(endpoint()),
        });
        assert!(projection.info_visible);
        assert_eq!(projection.endpoint, Some(endpoint().endpoint));
    }

    #[test]
    fn test_connected() {
        let mut tunnel = endpoint();
        tunnel.tunnel_type = TunnelType::OpenVpn;
        let projection = project(&TunnelState::Connected { endpoint: tunnel });
        assert!(projection.info_visible);
        assert_eq!(projection.endpoint, Some(tunnel.endpoint));
        assert_eq!(projection.tunnel_type, TunnelType::OpenVpn);
    }
}
