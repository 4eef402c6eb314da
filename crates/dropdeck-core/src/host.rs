//! LAN-facing base URL handed to the server as `PUBLIC_HOST`.
//!
//! The server string-concatenates paths onto this value when it builds the
//! links and codes it hands out to other devices, so it must be reachable
//! from the LAN, carry an explicit scheme, and carry no trailing slash.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use serde::Serialize;
use thiserror::Error;

/// Port the server binds by default.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("public host must start with http:// or https://: {0}")]
    MissingScheme(String),
    #[error("public host has an empty host component: {0}")]
    EmptyHost(String),
    #[error("public host has an invalid port: {0}")]
    InvalidPort(String),
}

/// Validated `http://<host>[:<port>]` base URL, normalized without a
/// trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublicHost(String);

impl PublicHost {
    /// Parse and normalize a user-supplied base URL.
    pub fn parse(raw: &str) -> Result<Self, HostError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| HostError::MissingScheme(raw.to_string()))?;

        let (host, port) = match rest.rsplit_once(':') {
            Some((h, p)) => (h, Some(p)),
            None => (rest, None),
        };
        if host.is_empty() {
            return Err(HostError::EmptyHost(raw.to_string()));
        }
        if let Some(p) = port {
            p.parse::<u16>()
                .map_err(|_| HostError::InvalidPort(raw.to_string()))?;
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build the base URL from the machine's LAN address.
    ///
    /// Falls back to loopback when no route is available; the server still
    /// works on the local machine, it just cannot be reached from other
    /// devices.
    pub fn detect(port: u16) -> Self {
        let ip = lan_ip().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        Self(format!("http://{}:{}", ip, port))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Local address the OS would pick for outbound traffic.
///
/// Connecting a UDP socket only selects a route; no packet is sent, so this
/// works offline-behind-a-router and never blocks.
fn lan_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind(("0.0.0.0", 0)).ok()?;
    socket.connect(("8.8.8.8", 80)).ok()?;
    Some(socket.local_addr().ok()?.ip())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_lan_url() {
        let host = PublicHost::parse("http://192.168.0.132:5000").unwrap();
        assert_eq!(host.as_str(), "http://192.168.0.132:5000");
    }

    #[test]
    fn test_parse_accepts_https_and_hostname() {
        let host = PublicHost::parse("https://media.local:8443").unwrap();
        assert_eq!(host.as_str(), "https://media.local:8443");
    }

    #[test]
    fn test_parse_allows_missing_port() {
        let host = PublicHost::parse("http://192.168.1.20").unwrap();
        assert_eq!(host.as_str(), "http://192.168.1.20");
    }

    #[test]
    fn test_parse_trims_trailing_slash() {
        let host = PublicHost::parse("http://192.168.1.20:5000/").unwrap();
        assert_eq!(host.as_str(), "http://192.168.1.20:5000");
    }

    #[test]
    fn test_parse_rejects_missing_scheme() {
        let err = PublicHost::parse("192.168.0.132:5000").unwrap_err();
        assert!(matches!(err, HostError::MissingScheme(_)));
    }

    #[test]
    fn test_parse_rejects_empty_host() {
        let err = PublicHost::parse("http://:5000").unwrap_err();
        assert!(matches!(err, HostError::EmptyHost(_)));
    }

    #[test]
    fn test_parse_rejects_bad_port() {
        let err = PublicHost::parse("http://192.168.0.132:port").unwrap_err();
        assert!(matches!(err, HostError::InvalidPort(_)));

        let err = PublicHost::parse("http://192.168.0.132:99999").unwrap_err();
        assert!(matches!(err, HostError::InvalidPort(_)));
    }

    #[test]
    fn test_detect_yields_valid_host_with_requested_port() {
        let host = PublicHost::detect(5000);
        assert!(host.as_str().starts_with("http://"));
        assert!(host.as_str().ends_with(":5000"));
        // Whatever the route lookup produced must round-trip through parse.
        assert_eq!(PublicHost::parse(host.as_str()).unwrap(), host);
    }
}
