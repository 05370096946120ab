use thiserror::Error;

/// Errors produced while encoding or decoding XDR values.
///
/// Every variant is deterministic: retrying the same operation on the same
/// input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XdrError {
    /// The input ended before the value was complete.
    #[error("buffer truncated: needed {needed} bytes but only {remaining} remain")]
    Truncated { needed: usize, remaining: usize },

    /// A length prefix is larger than the declared maximum of the type.
    #[error("length {len} exceeds declared maximum {max}")]
    LengthExceedsMax { len: u32, max: u32 },

    /// Alignment padding contained a non-zero byte.
    #[error("non-zero padding byte")]
    NonZeroPadding,

    /// A boolean was encoded as something other than 0 or 1.
    #[error("invalid boolean value {0}")]
    InvalidBool(u32),

    /// Bytes were left over after the top-level value was decoded.
    #[error("{0} unread bytes after value")]
    TrailingData(usize),

    /// Nested structs/unions went deeper than the configured limit.
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,

    /// More bytes were read or written than the configured limit allows.
    #[error("byte length limit exceeded")]
    LengthLimitExceeded,

    /// The base64 text form could not be decoded.
    #[error("invalid base64 input")]
    InvalidBase64,

    /// An enum code or union discriminator is not part of the declared table.
    #[error("unknown discriminant {value} for {type_name}")]
    UnknownDiscriminant { type_name: &'static str, value: i64 },

    /// A union was wrapped with a payload whose type does not match the arm.
    #[error("payload type does not match arm {arm} of {type_name}")]
    ArmTypeMismatch { type_name: &'static str, arm: i64 },

    /// A bounded collection was built with more elements than it may hold.
    #[error("{len} elements exceed maximum of {max}")]
    CardinalityExceeded { len: usize, max: u32 },

    /// A fixed-length sequence was built with the wrong number of elements.
    #[error("expected exactly {expected} elements, got {actual}")]
    FixedLengthMismatch { expected: usize, actual: usize },

    /// A required struct field was never set.
    #[error("required field `{0}` is not set")]
    MissingField(&'static str),
}

impl XdrError {
    /// Returns `true` for errors caused by bytes that are not a valid
    /// encoding, as opposed to values that could not be constructed.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::Truncated { .. }
                | Self::LengthExceedsMax { .. }
                | Self::NonZeroPadding
                | Self::InvalidBool(_)
                | Self::TrailingData(_)
                | Self::DepthLimitExceeded
                | Self::LengthLimitExceeded
                | Self::InvalidBase64
        )
    }
}
