use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;

const KIND: &str = "port";

/// A TCP/UDP port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Port(u16);

impl Port {
    pub fn new(number: u16) -> Self {
        Self(number)
    }

    /// Checks whether a string is a plain decimal port number in range.
    ///
    /// Signs, whitespace and radix prefixes are rejected.
    pub fn validate(string: &str) -> bool {
        !string.is_empty()
            && string.bytes().all(|b| b.is_ascii_digit())
            && string.parse::<u16>().is_ok()
    }

    pub fn parse(string: &str) -> Result<Self, AddressError> {
        if !Self::validate(string) {
            return Err(AddressError::invalid(KIND, string));
        }
        string
            .parse::<u16>()
            .map(Self)
            .map_err(|_| AddressError::invalid(KIND, string))
    }

    pub fn number(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Port {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u16> for Port {
    fn from(number: u16) -> Self {
        Self(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        assert!(Port::validate("0"));
        assert!(Port::validate("80"));
        assert!(Port::validate("65535"));
        assert_eq!(Port::parse("8080"), Ok(Port::new(8080)));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(!Port::validate("65536"));
        assert!(!Port::validate(""));
        assert!(!Port::validate("-1"));
        assert!(!Port::validate("+80"));
        assert!(!Port::validate("80a"));
        assert!(!Port::validate(" 80"));
    }

    #[test]
    fn parse_error_embeds_literal() {
        let err = Port::parse("65536").unwrap_err();
        assert!(err.to_string().contains("'65536'"));
    }
}
