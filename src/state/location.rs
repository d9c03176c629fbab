//! Geographic location snapshot types.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Most recently resolved location and exit addresses.
///
/// Any field may be missing; missing text renders as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoIpLocation {
    /// Country name.
    pub country: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Hostname of the exit relay, if the exit is one.
    pub hostname: Option<String>,
    /// Observed public IPv4 address.
    pub ipv4: Option<Ipv4Addr>,
    /// Observed public IPv6 address.
    pub ipv6: Option<Ipv6Addr>,
}

impl GeoIpLocation {
    /// "City, Country" summary for log lines.
    #[must_use]
    pub fn summary(&self) -> String {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.clone(),
            (None, Some(country)) => country.clone(),
            (None, None) => crate::constants::MSG_NO_DATA.to_string(),
        }
    }

    /// Public address text: either address alone, or `ipv4 / ipv6` when both are known.
    #[must_use]
    pub fn public_address(&self) -> Option<String> {
        match (self.ipv4, self.ipv6) {
            (Some(v4), Some(v6)) => Some(format!("{v4} / {v6}")),
            (Some(v4), None) => Some(v4.to_string()),
            (None, Some(v6)) => Some(v6.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(ipv4: Option<&str>, ipv6: Option<&str>) -> GeoIpLocation {
        GeoIpLocation {
            ipv4: ipv4.map(|ip| ip.parse().unwrap()),
            ipv6: ipv6.map(|ip| ip.parse().unwrap()),
            ..GeoIpLocation::default()
        }
    }

    #[test]
    fn test_public_address_ipv4_only() {
        assert_eq!(
            location(Some("1.2.3.4"), None).public_address().as_deref(),
            Some("1.2.3.4")
        );
    }

    #[test]
    fn test_public_address_ipv6_only() {
        assert_eq!(
            location(None, Some("::1")).public_address().as_deref(),
            Some("::1")
        );
    }

    #[test]
    fn test_public_address_dual_stack() {
        assert_eq!(
            location(Some("1.2.3.4"), Some("::1"))
                .public_address()
                .as_deref(),
            Some("1.2.3.4 / ::1")
        );
    }

    #[test]
    fn test_public_address_none() {
        assert_eq!(location(None, None).public_address(), None);
    }

    #[test]
    fn test_summary() {
        let mut loc = GeoIpLocation {
            city: Some("Gothenburg".into()),
            country: Some("Sweden".into()),
            ..GeoIpLocation::default()
        };
        assert_eq!(loc.summary(), "Gothenburg, Sweden");
        loc.city = None;
        assert_eq!(loc.summary(), "Sweden");
        loc.country = None;
        assert_eq!(loc.summary(), "---");
    }

    #[test]
    fn test_partial_json() {
        let loc: GeoIpLocation =
            serde_json::from_str(r#"{"country": "Sweden", "ipv6": "2001:db8::7"}"#).unwrap();
        assert_eq!(loc.country.as_deref(), Some("Sweden"));
        assert_eq!(loc.city, None);
        assert_eq!(loc.public_address().as_deref(), Some("2001:db8::7"));
    }
}
