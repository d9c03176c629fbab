//! User-facing label text for the tunnel info section.
//!
//! The composer never hardcodes strings; everything goes through a
//! [`LabelFormatter`]. [`Labels`] is the template-based implementation that
//! can be overridden from the `[labels]` table of `config.toml`.

use serde::Deserialize;
use std::net::IpAddr;

use crate::state::{TransportProtocol, TunnelType};

/// Formats labels and address lines for display.
pub trait LabelFormatter {
    /// Label for a tunnel protocol family.
    fn tunnel_protocol(&self, tunnel_type: TunnelType) -> String;
    /// Label for a transport protocol.
    fn transport(&self, protocol: TransportProtocol) -> String;
    /// Line describing where the tunnel enters the relay.
    fn in_address(&self, host: IpAddr, port: u16, protocol: TransportProtocol) -> String;
    /// Line describing the observed public address(es).
    fn out_address(&self, address: &str) -> String;
}

/// Template-driven labels.
///
/// `in_address` understands `{host}`, `{port}` and `{transport}`;
/// `out_address` understands `{address}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub wireguard: String,
    pub openvpn: String,
    pub tcp: String,
    pub udp: String,
    pub in_address: String,
    pub out_address: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            wireguard: "WireGuard".to_string(),
            openvpn: "OpenVPN".to_string(),
            tcp: "TCP".to_string(),
            udp: "UDP".to_string(),
            in_address: "{host} : {port} {transport}".to_string(),
            out_address: "{address}".to_string(),
        }
    }
}

impl LabelFormatter for Labels {
    fn tunnel_protocol(&self, tunnel_type: TunnelType) -> String {
        match tunnel_type {
            TunnelType::WireGuard => self.wireguard.clone(),
            TunnelType::OpenVpn => self.openvpn.clone(),
        }
    }

    fn transport(&self, protocol: TransportProtocol) -> String {
        match protocol {
            TransportProtocol::Tcp => self.tcp.clone(),
            TransportProtocol::Udp => self.udp.clone(),
        }
    }

    fn in_address(&self, host: IpAddr, port: u16, protocol: TransportProtocol) -> String {
        fill(
            &self.in_address,
            &[
                ("host", &host.to_string()),
                ("port", &port.to_string()),
                ("transport", &self.transport(protocol)),
            ],
        )
    }

    fn out_address(&self, address: &str) -> String {
        fill(&self.out_address, &[("address", address)])
    }
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Unknown placeholders and stray braces are copied verbatim, and substituted
/// values are never re-expanded.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        if let Some((value, close)) = replaced {
            out.push_str(value);
            rest = &after[close + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
