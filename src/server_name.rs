//! Server name type for the homeserver portion of Matrix identifiers.
//!
//! A server name is `host [ ":" port ]` where host is a DNS name, an IPv4
//! address, or a bracketed IPv6 literal. Server names are compared
//! byte-for-byte, so the original casing is preserved rather than folded.

use std::cmp::Ordering;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::constants::{MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH, MAX_SERVER_NAME_LENGTH};
use crate::error::ServerNameError;

/// The host portion of a server name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// A domain name (e.g., "matrix.org")
    Domain(String),
    /// An IPv4 address (e.g., "192.168.1.1")
    Ipv4(Ipv4Addr),
    /// An IPv6 address (e.g., `::1`)
    Ipv6(Ipv6Addr),
}

/// A validated homeserver name.
///
/// # Examples
///
/// ```
/// use matrix_link::ServerName;
///
/// let server = ServerName::parse("matrix.org").unwrap();
/// assert_eq!(server.host_str(), "matrix.org");
/// assert!(server.port().is_none());
///
/// let server = ServerName::parse("example.com:8448").unwrap();
/// assert_eq!(server.host_str(), "example.com");
/// assert_eq!(server.port(), Some(8448));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerName {
    host: Host,
    port: Option<u16>,
    /// Original string representation, casing preserved
    normalized: String,
}

impl ServerName {
    /// Parses a server name from a string.
    ///
    /// # Errors
    ///
    /// Returns `ServerNameError` if:
    /// - The input is empty
    /// - The input exceeds 255 characters
    /// - The domain contains invalid characters or labels
    /// - The IP address is malformed
    /// - The port is invalid (not numeric or out of range)
    pub fn parse(input: &str) -> Result<Self, ServerNameError> {
        if input.is_empty() {
            return Err(ServerNameError::Empty);
        }

        if input.len() > MAX_SERVER_NAME_LENGTH {
            return Err(ServerNameError::TooLong {
                max: MAX_SERVER_NAME_LENGTH,
                actual: input.len(),
            });
        }

        // Handle IPv6 literals: [::1]:port
        if input.starts_with('[') {
            return Self::parse_ipv6_literal(input);
        }

        let (host_str, port) = Self::split_host_port(input)?;
        let host = Self::parse_host(host_str)?;
        let normalized = Self::normalize(&host, port);

        Ok(Self {
            host,
            port,
            normalized,
        })
    }

    /// Returns the host portion.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the host as a string.
    #[must_use]
    pub fn host_str(&self) -> &str {
        match &self.host {
            Host::Domain(d) => d,
            Host::Ipv4(_) => self.normalized.split(':').next().unwrap_or(&self.normalized),
            Host::Ipv6(_) => {
                let start = self.normalized.find('[').map_or(0, |i| i + 1);
                let end = self.normalized.find(']').unwrap_or(self.normalized.len());
                &self.normalized[start..end]
            }
        }
    }

    /// Returns the port, if specified.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the normalized string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    fn split_host_port(input: &str) -> Result<(&str, Option<u16>), ServerNameError> {
        if let Some(colon_idx) = input.rfind(':') {
            let host_part = &input[..colon_idx];
            let port_part = &input[colon_idx + 1..];

            if port_part.is_empty() || !port_part.chars().all(|c| c.is_ascii_digit()) {
                return Err(ServerNameError::InvalidPort {
                    value: port_part.to_string(),
                    reason: "port must be numeric",
                });
            }
            let port: u16 = port_part.parse().map_err(|_| ServerNameError::InvalidPort {
                value: port_part.to_string(),
                reason: "port must be 0-65535",
            })?;
            return Ok((host_part, Some(port)));
        }
        Ok((input, None))
    }

    fn parse_host(host_str: &str) -> Result<Host, ServerNameError> {
        if let Ok(ip) = host_str.parse::<Ipv4Addr>() {
            return Ok(Host::Ipv4(ip));
        }

        Self::validate_domain(host_str)?;
        Ok(Host::Domain(host_str.to_string()))
    }

    fn parse_ipv6_literal(input: &str) -> Result<Self, ServerNameError> {
        let closing_bracket =
            input.find(']').ok_or_else(|| ServerNameError::InvalidIpAddress {
                value: input.to_string(),
                reason: "missing closing bracket for IPv6 literal",
            })?;

        let ipv6_str = &input[1..closing_bracket];
        let ipv6: Ipv6Addr = ipv6_str.parse().map_err(|_| ServerNameError::InvalidIpAddress {
            value: ipv6_str.to_string(),
            reason: "invalid IPv6 address",
        })?;

        let port = if input.len() > closing_bracket + 1 {
            if input.as_bytes().get(closing_bracket + 1) != Some(&b':') {
                return Err(ServerNameError::InvalidPort {
                    value: input[closing_bracket + 1..].to_string(),
                    reason: "expected ':' after IPv6 closing bracket",
                });
            }
            let port_str = &input[closing_bracket + 2..];
            Some(port_str.parse::<u16>().map_err(|_| ServerNameError::InvalidPort {
                value: port_str.to_string(),
                reason: "port must be 0-65535",
            })?)
        } else {
            None
        };

        let normalized = Self::normalize(&Host::Ipv6(ipv6), port);
        Ok(Self {
            host: Host::Ipv6(ipv6),
            port,
            normalized,
        })
    }

    fn validate_domain(domain: &str) -> Result<(), ServerNameError> {
        if domain.is_empty() {
            return Err(ServerNameError::Empty);
        }

        if domain.len() > MAX_DNS_DOMAIN_LENGTH {
            return Err(ServerNameError::InvalidDomain {
                domain: domain.to_string(),
                reason: "domain exceeds 253 character limit",
            });
        }

        for label in domain.split('.') {
            if label.is_empty() {
                return Err(ServerNameError::InvalidDomain {
                    domain: domain.to_string(),
                    reason: "empty label (consecutive dots or leading/trailing dot)",
                });
            }

            if label.len() > MAX_DNS_LABEL_LENGTH {
                return Err(ServerNameError::LabelTooLong {
                    label: label.to_string(),
                    max: MAX_DNS_LABEL_LENGTH,
                    actual: label.len(),
                });
            }

            for (j, c) in label.chars().enumerate() {
                if !c.is_ascii_alphanumeric() && c != '-' {
                    return Err(ServerNameError::InvalidChar {
                        char: c,
                        position: domain.find(label).unwrap_or(0) + j,
                    });
                }
            }

            if label.starts_with('-') || label.ends_with('-') {
                return Err(ServerNameError::InvalidDomain {
                    domain: domain.to_string(),
                    reason: "label cannot start or end with hyphen",
                });
            }
        }

        Ok(())
    }

    fn normalize(host: &Host, port: Option<u16>) -> String {
        let host_str = match host {
            Host::Domain(d) => d.clone(),
            Host::Ipv4(ip) => ip.to_string(),
            Host::Ipv6(ip) => format!("[{ip}]"),
        };

        match port {
            Some(p) => format!("{host_str}:{p}"),
            None => host_str,
        }
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for ServerName {
    type Err = ServerNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ServerName {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for ServerName {
    type Error = ServerNameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for ServerName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServerName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ServerName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ServerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
