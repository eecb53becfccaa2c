use std::fmt;
use std::str::FromStr;

use crate::Address;
use crate::error::AddressError;
use crate::port::Port;

const KIND: &str = "domain";
const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A hostname, stored lowercase.
///
/// Validation is purely lexical: labels of alphanumerics and interior
/// hyphens, with a non-numeric final label so the family stays disjoint
/// from dotted-quad space. No punycode or IDNA handling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    name: String,
}

impl Domain {
    /// Checks whether a string is a hostname, with an optional `:port`
    /// suffix.
    pub fn validate(string: &str) -> bool {
        let name = match string.split_once(':') {
            Some((name, port)) => {
                if !Port::validate(port) {
                    return false;
                }
                name
            }
            None => string,
        };

        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return false;
        }

        let mut last = "";
        for label in name.split('.') {
            if !is_label(label) {
                return false;
            }
            last = label;
        }

        // an all-numeric final label would shadow malformed dotted quads
        // like `999.1.1.1`
        !last.bytes().all(|b| b.is_ascii_digit())
    }

    /// Parses a hostname, dropping any `:port` suffix and lowercasing.
    pub fn parse(string: &str) -> Result<Self, AddressError> {
        if !Self::validate(string) {
            return Err(AddressError::invalid(KIND, string));
        }
        let name = string.split_once(':').map_or(string, |(name, _)| name);
        Ok(Self {
            name: name.to_ascii_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl Address for Domain {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn bytes(&self) -> Vec<u8> {
        self.name.clone().into_bytes()
    }

    fn with_port(&self, port: Port) -> String {
        format!("{}:{}", self.name, port)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Domain {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_hostnames() {
        assert!(Domain::validate("example.com"));
        assert!(Domain::validate("sub.example.com"));
        assert!(Domain::validate("localhost"));
        assert!(Domain::validate("my-host.example.org"));
        assert!(Domain::validate("example.com:8080"));
    }

    #[test]
    fn rejects_malformed_hostnames() {
        assert!(!Domain::validate(""));
        assert!(!Domain::validate(".example.com"));
        assert!(!Domain::validate("example..com"));
        assert!(!Domain::validate("-example.com"));
        assert!(!Domain::validate("example-.com"));
        assert!(!Domain::validate("exa mple.com"));
        assert!(!Domain::validate("example.com:99999"));
    }

    #[test]
    fn rejects_numeric_final_label() {
        assert!(!Domain::validate("999.1.1.1"));
        assert!(!Domain::validate("example.123"));
        assert!(Domain::validate("123.example"));
    }

    #[test]
    fn parse_lowercases_and_strips_port() {
        let domain = Domain::parse("Example.COM:8080").unwrap();
        assert_eq!(domain.as_str(), "example.com");
        assert_eq!(domain.name(), "example.com");
    }

    #[test]
    fn renders_port_and_url_forms() {
        let domain = Domain::parse("example.com").unwrap();
        assert_eq!(domain.with_port(Port::new(443)), "example.com:443");
        assert_eq!(
            domain.to_url(true, Some(Port::new(8443))),
            "https://example.com:8443/"
        );
        assert_eq!(domain.to_url(false, None), "http://example.com/");
    }
}
