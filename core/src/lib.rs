//! # addrkit-core
//!
//! Parsing and normalization for textual network addresses.
//!
//! ## Characteristics
//! * **Pure**: no I/O, no DNS resolution, no shared mutable state. Every
//!   operation is a bounded, deterministic string/array transformation.
//! * **Bit-exact**: parsed values round-trip through their canonical and
//!   raw renderings.
//! * **Validation is free of errors**: `validate` functions are plain
//!   boolean predicates; only `parse`-class operations return
//!   [`AddressError`].
//!
//! ## Contents
//! * **[`ipv4`]**: dotted-quad codec.
//! * **[`ipv6`]**: colon-hex codec with `::` compression, brackets, ports
//!   and IPv4-mapped forms.
//! * **[`domain`]**: lexical hostname validation.
//! * **[`family`]**: family detection and the [`HttpAddress`] dispatcher.
//! * **[`port`]**: port number validation and parsing.

pub mod domain;
pub mod error;
pub mod family;
pub mod ipv4;
pub mod ipv6;
pub mod port;

pub use domain::Domain;
pub use error::AddressError;
pub use family::{AddressFamily, HttpAddress, classify};
pub use ipv4::Ipv4Address;
pub use ipv6::Ipv6Address;
pub use port::Port;

/// Common surface of every address value type.
///
/// Implementations are immutable: derived representations are freshly
/// allocated and never alias internal storage.
pub trait Address {
    /// Human-readable canonical form of the address.
    fn name(&self) -> String;

    /// Raw byte representation of the address.
    fn bytes(&self) -> Vec<u8>;

    /// `host:port` form suitable for socket-style strings.
    fn with_port(&self, port: Port) -> String;

    /// Full `http(s)://…/` URL, with a guaranteed trailing slash.
    fn to_url(&self, secure: bool, port: Option<Port>) -> String {
        let mut url = String::from(if secure { "https://" } else { "http://" });
        match port {
            Some(port) => url.push_str(&self.with_port(port)),
            None => url.push_str(&self.name()),
        }
        if !url.ends_with('/') {
            url.push('/');
        }
        url
    }
}
