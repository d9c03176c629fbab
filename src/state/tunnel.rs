//! Tunnel connection state types.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Transport protocol carrying the tunnel traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportProtocol {
    /// TCP transport.
    Tcp,
    /// UDP transport.
    Udp,
}

impl std::fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportProtocol::Tcp => write!(f, "TCP"),
            TransportProtocol::Udp => write!(f, "UDP"),
        }
    }
}

/// Tunnel protocol family in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TunnelType {
    /// `WireGuard` tunnel.
    #[default]
    #[serde(rename = "wireguard")]
    WireGuard,
    /// `OpenVPN` tunnel.
    #[serde(rename = "openvpn")]
    OpenVpn,
}

impl std::fmt::Display for TunnelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TunnelType::WireGuard => write!(f, "WireGuard"),
            TunnelType::OpenVpn => write!(f, "OpenVPN"),
        }
    }
}

/// Remote address and transport of the relay the tunnel talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// Host and port of the relay.
    pub address: SocketAddr,
    /// Transport used to reach it.
    pub protocol: TransportProtocol,
}

impl Endpoint {
    #[must_use]
    pub const fn new(address: SocketAddr, protocol: TransportProtocol) -> Self {
        Self { address, protocol }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.protocol)
    }
}

/// An endpoint together with the tunnel protocol negotiated over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TunnelEndpoint {
    #[serde(flatten)]
    pub endpoint: Endpoint,
    #[serde(default)]
    pub tunnel_type: TunnelType,
}

impl TunnelEndpoint {
    #[must_use]
    pub const fn new(endpoint: Endpoint, tunnel_type: TunnelType) -> Self {
        Self {
            endpoint,
            tunnel_type,
        }
    }
}

/// What the tunnel does once a disconnect completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionAfterDisconnect {
    /// Stay disconnected.
    #[default]
    Nothing,
    /// Block all traffic.
    Block,
    /// Connect again.
    Reconnect,
}

/// Tunnel connection lifecycle.
///
/// Values are always delivered whole; exactly one variant is active at a time.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TunnelState {
    /// No tunnel.
    #[default]
    Disconnected,
    /// Tunnel is being set up. The relay may not be chosen yet.
    Connecting {
        #[serde(default)]
        endpoint: Option<TunnelEndpoint>,
    },
    /// Tunnel is up.
    Connected { endpoint: TunnelEndpoint },
    /// Tunnel is being torn down.
    Disconnecting {
        #[serde(default)]
        after: ActionAfterDisconnect,
    },
    /// Tunnel failed.
    Error {
        cause: String,
        /// Whether traffic is blocked while in this state.
        #[serde(default)]
        blocking: bool,
    },
}

impl TunnelState {
    /// Short lowercase name of the variant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TunnelState::Disconnected => "disconnected",
            TunnelState::Connecting { .. } => "connecting",
            TunnelState::Connected { .. } => "connected",
            TunnelState::Disconnecting { .. } => "disconnecting",
            TunnelState::Error { .. } => "error",
        }
    }
}

impl std::fmt::Display for TunnelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TunnelState::Connecting {
                endpoint: Some(endpoint),
            }
            | TunnelState::Connected { endpoint } => {
                write!(
                    f,
                    "{} to {} ({})",
                    self.name(),
                    endpoint.endpoint,
                    endpoint.tunnel_type
                )
            }
            TunnelState::Disconnecting { after } => {
                write!(f, "{} (then {after:?})", self.name())
            }
            TunnelState::Error { cause, blocking } => {
                let blocking = if *blocking { ", blocking" } else { "" };
                write!(f, "{}: {cause}{blocking}", self.name())
            }
            TunnelState::Connecting { endpoint: None } | TunnelState::Disconnected => {
                write!(f, "{}", self.name())
            }
        }
    }
}
