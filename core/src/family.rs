//! # Address Family Dispatch
//!
//! Decides which codec a raw string belongs to and routes parsing through
//! it. Detection is purely lexical; ambiguous input yields no match rather
//! than an error.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::Address;
use crate::domain::Domain;
use crate::error::AddressError;
use crate::ipv4::Ipv4Address;
use crate::ipv6::Ipv6Address;
use crate::port::Port;

/// The lexical family of an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    Domain,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
            AddressFamily::Domain => "domain",
        };
        write!(f, "{label}")
    }
}

/// Detection order. The first validator that accepts the string wins; new
/// families slot in here without touching the existing codecs.
const FAMILIES: &[(AddressFamily, fn(&str) -> bool)] = &[
    (AddressFamily::Ipv4, Ipv4Address::validate),
    (AddressFamily::Ipv6, Ipv6Address::validate),
    (AddressFamily::Domain, Domain::validate),
];

/// Determines which address family a string belongs to, from lexical
/// inspection alone. Returns `None` when every validator rejects it.
pub fn classify(string: &str) -> Option<AddressFamily> {
    let family = FAMILIES
        .iter()
        .find(|(_, validate)| validate(string))
        .map(|(family, _)| *family);
    trace!(input = string, ?family, "classified address");
    family
}

/// An address usable as the host part of an HTTP URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HttpAddress {
    Ipv4(Ipv4Address),
    Ipv6(Ipv6Address),
    Domain(Domain),
}

impl HttpAddress {
    pub fn validate(string: &str) -> bool {
        classify(string).is_some()
    }

    /// Dispatches to the matching family's parser.
    pub fn parse(string: &str) -> Result<Self, AddressError> {
        match classify(string) {
            Some(AddressFamily::Ipv4) => Ok(Self::Ipv4(Ipv4Address::parse(string)?)),
            Some(AddressFamily::Ipv6) => Ok(Self::Ipv6(Ipv6Address::parse(string)?)),
            Some(AddressFamily::Domain) => Ok(Self::Domain(Domain::parse(string)?)),
            None => Err(AddressError::invalid("HTTP", string)),
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Self::Ipv4(_) => AddressFamily::Ipv4,
            Self::Ipv6(_) => AddressFamily::Ipv6,
            Self::Domain(_) => AddressFamily::Domain,
        }
    }
}

impl Address for HttpAddress {
    fn name(&self) -> String {
        match self {
            Self::Ipv4(address) => address.name(),
            Self::Ipv6(address) => address.name(),
            Self::Domain(address) => address.name(),
        }
    }

    fn bytes(&self) -> Vec<u8> {
        match self {
            Self::Ipv4(address) => address.bytes(),
            Self::Ipv6(address) => address.bytes(),
            Self::Domain(address) => address.bytes(),
        }
    }

    fn with_port(&self, port: Port) -> String {
        match self {
            Self::Ipv4(address) => address.with_port(port),
            Self::Ipv6(address) => address.with_port(port),
            Self::Domain(address) => address.with_port(port),
        }
    }

    fn to_url(&self, secure: bool, port: Option<Port>) -> String {
        match self {
            Self::Ipv4(address) => address.to_url(secure, port),
            Self::Ipv6(address) => address.to_url(secure, port),
            Self::Domain(address) => address.to_url(secure, port),
        }
    }
}

impl fmt::Display for HttpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HttpAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
