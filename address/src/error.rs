use thiserror::Error;

/// Reasons a StrKey string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrkeyError {
    /// Not RFC 4648 base32, or not in canonical unpadded form.
    #[error("invalid base32 encoding")]
    InvalidEncoding,

    /// The decoded payload has the wrong size for its version.
    #[error("invalid decoded length {0}")]
    InvalidLength(usize),

    /// The leading version byte is not a known key kind.
    #[error("unknown version byte {0:#04x}")]
    InvalidVersion(u8),

    /// The trailing CRC16 does not match.
    #[error("checksum mismatch")]
    InvalidChecksum,

    /// The payload is structurally invalid for its kind (signed payload
    /// length or padding).
    #[error("invalid payload")]
    InvalidPayload,
}
