use thiserror::Error;

/// Errors produced by parse-class operations.
///
/// Parsing is all-or-nothing: there are no retries and no partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The input text is not a member of the family's grammar.
    #[error("cannot parse '{literal}' as a valid {kind} address")]
    InvalidFormat {
        kind: &'static str,
        literal: String,
    },

    /// A backing slice had the wrong number of segments.
    #[error("an {kind} address must have exactly {expected} segments, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A structurally valid address was used in an operation that requires
    /// a different subtype.
    #[error("illegal address type: {0}")]
    IllegalAddressType(String),
}

impl AddressError {
    pub(crate) fn invalid(kind: &'static str, literal: &str) -> Self {
        Self::InvalidFormat {
            kind,
            literal: literal.to_string(),
        }
    }
}
