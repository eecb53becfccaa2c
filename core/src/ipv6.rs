//! # IPv6 Codec
//!
//! Validates, parses and renders colon-hex IPv6 text.
//!
//! Accepted input forms:
//! * `addr` or `[addr]`, optionally suffixed with `:port` when bracketed.
//! * 1-8 colon-separated groups of 1-4 hex digits, with at most one `::`
//!   compression token.
//! * The IPv4-mapped shortcut `::ffff:a.b.c.d`.

use std::fmt;
use std::str::FromStr;

use crate::Address;
use crate::error::AddressError;
use crate::ipv4::Ipv4Address;
use crate::port::Port;

const KIND: &str = "IPv6";
const GROUPS: usize = 8;
const MAPPED_PREFIX: &str = "::ffff:";
const LINK_LOCAL_MASK: u16 = 0xFFC0;
const LINK_LOCAL_PREFIX: u16 = 0xFE80;

/// An IPv6 address as eight ordered 16-bit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6Address {
    groups: [u16; GROUPS],
}

impl Ipv6Address {
    pub fn new(groups: [u16; GROUPS]) -> Self {
        Self { groups }
    }

    /// Builds an address from a slice, rejecting any length other than
    /// eight.
    pub fn from_slice(groups: &[u16]) -> Result<Self, AddressError> {
        let groups: [u16; GROUPS] =
            groups
                .try_into()
                .map_err(|_| AddressError::InvalidLength {
                    kind: KIND,
                    expected: GROUPS,
                    actual: groups.len(),
                })?;
        Ok(Self { groups })
    }

    /// Builds an address from its 128-bit integer representation, split
    /// into high and low 64-bit halves. Exact inverse of [`to_longs`].
    ///
    /// [`to_longs`]: Ipv6Address::to_longs
    pub fn from_longs(high: u64, low: u64) -> Self {
        let mut groups = [0u16; GROUPS];
        for (index, group) in groups.iter_mut().enumerate() {
            let half = if index < 4 { high } else { low };
            *group = (half >> (48 - (index % 4) * 16)) as u16;
        }
        Self { groups }
    }

    /// Checks whether a string is a valid IPv6 address, bracketed or not,
    /// with an optional `:port` suffix after the closing bracket.
    pub fn validate(string: &str) -> bool {
        let Some(address) = strip_host(string) else {
            return false;
        };

        // IPv4-mapped shortcut: the remainder is judged by the IPv4 grammar
        if let Some(mapped) = address.strip_prefix(MAPPED_PREFIX)
            && Ipv4Address::validate(mapped)
        {
            return true;
        }

        expand_groups(address).is_some()
    }

    /// Parses IPv6 text into its eight groups.
    ///
    /// The `::ffff:<ipv4>` form embeds the four octets into the last two
    /// groups, so the result satisfies [`is_mapped`](Ipv6Address::is_mapped)
    /// and round-trips through [`to_ipv4`](Ipv6Address::to_ipv4).
    pub fn parse(string: &str) -> Result<Self, AddressError> {
        let address = strip_host(string).ok_or_else(|| AddressError::invalid(KIND, string))?;

        if let Some(mapped) = address.strip_prefix(MAPPED_PREFIX)
            && Ipv4Address::validate(mapped)
        {
            let [a, b, c, d] = Ipv4Address::parse(mapped)?.octets();
            let mut groups = [0u16; GROUPS];
            groups[5] = 0xffff;
            groups[6] = u16::from_be_bytes([a, b]);
            groups[7] = u16::from_be_bytes([c, d]);
            return Ok(Self { groups });
        }

        let tokens = expand_groups(address).ok_or_else(|| AddressError::invalid(KIND, string))?;
        let mut groups = [0u16; GROUPS];
        for (slot, token) in groups.iter_mut().zip(tokens) {
            *slot = u16::from_str_radix(token, 16)
                .map_err(|_| AddressError::invalid(KIND, string))?;
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> [u16; GROUPS] {
        self.groups
    }

    /// Full uppercase zero-padded form, e.g.
    /// `2001:0DB8:0000:0000:0000:0000:0000:0001`. No compression.
    pub fn raw_name(&self) -> String {
        let groups: Vec<String> = self.groups.iter().map(|g| format!("{g:04X}")).collect();
        groups.join(":")
    }

    /// Group-wise AND with a subnet mask.
    pub fn network_address(&self, mask: Ipv6Address) -> Ipv6Address {
        let mut groups = [0u16; GROUPS];
        for (index, group) in groups.iter_mut().enumerate() {
            *group = self.groups[index] & mask.groups[index];
        }
        Self { groups }
    }

    /// Group-wise OR with the 16-bit complement of a subnet mask.
    pub fn broadcast_address(&self, mask: Ipv6Address) -> Ipv6Address {
        let mut groups = [0u16; GROUPS];
        for (index, group) in groups.iter_mut().enumerate() {
            *group = self.groups[index] | !mask.groups[index];
        }
        Self { groups }
    }

    /// Per-group inclusive interval check.
    ///
    /// Each group is compared independently against the corresponding
    /// start/end group, not as a single 128-bit magnitude. This is only
    /// meaningful for prefix-style ranges where start and end share a
    /// common pattern.
    pub fn is_within_range(&self, start: Ipv6Address, end: Ipv6Address) -> bool {
        self.groups
            .iter()
            .zip(start.groups.iter().zip(&end.groups))
            .all(|(group, (lo, hi))| (lo..=hi).contains(&group))
    }

    /// Whether this is a link-local address (`fe80::/10`).
    pub fn is_local(&self) -> bool {
        self.groups[0] & LINK_LOCAL_MASK == LINK_LOCAL_PREFIX
    }

    /// Whether this is an IPv4-mapped address: groups 0-4 all zero and
    /// group 5 exactly `0xffff`. Groups 6-7 carry the embedded IPv4
    /// address and are unconstrained.
    pub fn is_mapped(&self) -> bool {
        self.groups[..5].iter().all(|&group| group == 0) && self.groups[5] == 0xffff
    }

    /// Extracts the embedded IPv4 address from an IPv4-mapped address.
    ///
    /// Fails with [`AddressError::IllegalAddressType`] when
    /// [`is_mapped`](Ipv6Address::is_mapped) does not hold.
    pub fn to_ipv4(&self) -> Result<Ipv4Address, AddressError> {
        if !self.is_mapped() {
            return Err(AddressError::IllegalAddressType(format!(
                "'{}' is not an IPv4-mapped IPv6 address",
                self.name()
            )));
        }

        let [a, b] = self.groups[6].to_be_bytes();
        let [c, d] = self.groups[7].to_be_bytes();
        Ok(Ipv4Address::new([a, b, c, d]))
    }

    /// Packs the groups into two 64-bit halves, each group occupying its
    /// 16-bit slot from bit 48 downward.
    pub fn to_longs(&self) -> (u64, u64) {
        let mut high = 0u64;
        let mut low = 0u64;
        for (index, group) in self.groups.iter().enumerate() {
            let slot = (u64::from(*group)) << (48 - (index % 4) * 16);
            if index < 4 {
                high |= slot;
            } else {
                low |= slot;
            }
        }
        (high, low)
    }

    /// Locates the longest run of two or more consecutive zero groups,
    /// leftmost on ties, as `(start, length)`.
    fn zero_run(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;
        let mut index = 0;
        while index < GROUPS {
            if self.groups[index] != 0 {
                index += 1;
                continue;
            }
            let start = index;
            while index < GROUPS && self.groups[index] == 0 {
                index += 1;
            }
            let length = index - start;
            if length >= 2 && best.is_none_or(|(_, best_length)| length > best_length) {
                best = Some((start, length));
            }
        }
        best
    }
}

impl Address for Ipv6Address {
    /// Canonical compressed form: lowercase hex without leading zeros,
    /// with the longest zero run collapsed to `::` (leftmost run on ties,
    /// single zero groups left alone).
    fn name(&self) -> String {
        let hex = |groups: &[u16]| -> String {
            let tokens: Vec<String> = groups.iter().map(|g| format!("{g:x}")).collect();
            tokens.join(":")
        };

        match self.zero_run() {
            Some((start, length)) => {
                let head = hex(&self.groups[..start]);
                let tail = hex(&self.groups[start + length..]);
                format!("{head}::{tail}")
            }
            None => hex(&self.groups),
        }
    }

    /// The UTF-8 bytes of the canonical name. Callers rely on this being
    /// the text encoding, not a packed 128-bit value.
    fn bytes(&self) -> Vec<u8> {
        self.name().into_bytes()
    }

    fn with_port(&self, port: Port) -> String {
        format!("[{}]:{}", self.name(), port)
    }

    /// `http(s)://[addr]/` or `http(s)://[addr:port]/`. The brackets keep
    /// the group separators distinct from the URL port delimiter.
    fn to_url(&self, secure: bool, port: Option<Port>) -> String {
        let scheme = if secure { "https://" } else { "http://" };
        match port {
            Some(port) => format!("{scheme}[{}:{port}]/", self.name()),
            None => format!("{scheme}[{}]/", self.name()),
        }
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ipv6Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Strips the optional surrounding bracket and `:port` suffix, returning
/// the bare address text. `None` when the bracket or port syntax is broken.
fn strip_host(string: &str) -> Option<&str> {
    let string = match string.strip_prefix('[') {
        Some(rest) => {
            if !rest.contains(']') {
                return None;
            }
            rest
        }
        None => string,
    };

    match string.split_once(']') {
        Some((address, rest)) => {
            if rest.is_empty() {
                return Some(address);
            }
            let port = rest.strip_prefix(':')?;
            if !Port::validate(port) {
                return None;
            }
            Some(address)
        }
        None => Some(string),
    }
}

/// Expands an address into its eight hextet tokens.
///
/// Applies `::` zero-compression and the boundary `0` padding rule for a
/// lone leading/trailing colon. `None` when the text does not resolve to
/// exactly eight well-formed groups.
fn expand_groups(address: &str) -> Option<Vec<&str>> {
    let tokens: Vec<&str> = match address.find("::") {
        Some(at) => {
            let (head, tail) = (&address[..at], &address[at + 2..]);
            if tail.contains("::") {
                return None; // a second compression point is ambiguous
            }

            let head = side_tokens(head)?;
            let tail = side_tokens(tail)?;

            // An interior `::` must stand for at least one zero group; a
            // boundary one for at least two, since a single missing group
            // at an edge already has the plain `x:` spelling.
            let zeros = GROUPS.checked_sub(head.len() + tail.len())?;
            let minimum = if head.is_empty() || tail.is_empty() { 2 } else { 1 };
            if zeros < minimum {
                return None;
            }

            head.into_iter()
                .chain(std::iter::repeat_n("0", zeros))
                .chain(tail)
                .collect()
        }
        None => {
            let mut tokens: Vec<&str> = Vec::new();
            let mut body = address;
            if let Some(rest) = body.strip_prefix(':') {
                tokens.push("0");
                body = rest;
            }
            let trailing = body.strip_suffix(':');
            if let Some(rest) = trailing {
                body = rest;
            }
            if body.is_empty() {
                return None;
            }
            tokens.extend(body.split(':'));
            if trailing.is_some() {
                tokens.push("0");
            }
            tokens
        }
    };

    if tokens.len() != GROUPS || !tokens.iter().copied().all(is_hextet) {
        return None;
    }
    Some(tokens)
}

/// Splits one side of a `::` into explicit tokens. An empty side yields no
/// tokens; an empty token (from `:::` or a stray colon) is malformed.
fn side_tokens(side: &str) -> Option<Vec<&str>> {
    if side.is_empty() {
        return Some(Vec::new());
    }
    let tokens: Vec<&str> = side.split(':').collect();
    if tokens.iter().any(|token| token.is_empty()) {
        return None;
    }
    Some(tokens)
}

fn is_hextet(token: &str) -> bool {
    (1..=4).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_hexdigit())
}
