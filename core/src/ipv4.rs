use std::fmt;
use std::str::FromStr;

use crate::Address;
use crate::error::AddressError;
use crate::port::Port;

const KIND: &str = "IPv4";
const OCTETS: usize = 4;

/// An IPv4 address as four ordered octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Address {
    octets: [u8; OCTETS],
}

impl Ipv4Address {
    pub fn new(octets: [u8; OCTETS]) -> Self {
        Self { octets }
    }

    /// Builds an address from a slice, rejecting any length other than four.
    pub fn from_slice(octets: &[u8]) -> Result<Self, AddressError> {
        let octets: [u8; OCTETS] =
            octets
                .try_into()
                .map_err(|_| AddressError::InvalidLength {
                    kind: KIND,
                    expected: OCTETS,
                    actual: octets.len(),
                })?;
        Ok(Self { octets })
    }

    /// Checks whether a string is a dotted quad, with an optional `:port`
    /// suffix.
    ///
    /// Each of the four dot-separated tokens must be 1-3 decimal digits
    /// with a value of at most 255. No other characters are allowed.
    pub fn validate(string: &str) -> bool {
        let address = match string.split_once(':') {
            Some((address, port)) => {
                if !Port::validate(port) {
                    return false;
                }
                address
            }
            None => string,
        };

        let mut tokens = 0usize;
        for token in address.split('.') {
            tokens += 1;
            if tokens > OCTETS || !is_octet(token) {
                return false;
            }
        }
        tokens == OCTETS
    }

    /// Parses a dotted quad, dropping any `:port` suffix.
    pub fn parse(string: &str) -> Result<Self, AddressError> {
        if !Self::validate(string) {
            return Err(AddressError::invalid(KIND, string));
        }

        let address = string.split_once(':').map_or(string, |(address, _)| address);
        let mut octets = [0u8; OCTETS];
        for (slot, token) in octets.iter_mut().zip(address.split('.')) {
            *slot = token
                .parse()
                .map_err(|_| AddressError::invalid(KIND, string))?;
        }
        Ok(Self { octets })
    }

    pub fn octets(&self) -> [u8; OCTETS] {
        self.octets
    }
}

impl Address for Ipv4Address {
    /// Canonical decimal form, without leading zeros: `o0.o1.o2.o3`.
    fn name(&self) -> String {
        let [a, b, c, d] = self.octets;
        format!("{a}.{b}.{c}.{d}")
    }

    fn bytes(&self) -> Vec<u8> {
        self.octets.to_vec()
    }

    fn with_port(&self, port: Port) -> String {
        format!("{}:{}", self.name(), port)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_octet(token: &str) -> bool {
    (1..=3).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_digit())
        && token.parse::<u8>().is_ok()
}
