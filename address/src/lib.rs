//! StrKey: the checksummed base32 text form of Stellar keys and accounts.
//!
//! A StrKey is `base32(version || payload || crc16(version || payload))`
//! without padding, where the CRC16-XModem checksum is little-endian and the
//! version byte selects the first character (`G`, `S`, `M`, `T`, `X`, `P`).
#![cfg_attr(docsrs, feature(doc_cfg))]

mod checksum;
mod error;
#[cfg(feature = "serde")]
mod serialize;

pub use {checksum::crc16_xmodem, error::StrkeyError};
use {
    core::{fmt, ops::Deref, str::FromStr},
    data_encoding::BASE32_NOPAD,
};

/// Number of bytes in an ed25519 key or a SHA-256 hash.
pub const KEY_LEN: usize = 32;

/// Maximum length of the payload carried by a signed-payload signer.
pub const MAX_SIGNED_PAYLOAD_LEN: usize = 64;

/// Leading byte of a StrKey, fixing the key kind and the first character.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Version {
    /// `G...`
    PublicKeyEd25519 = 6 << 3,
    /// `S...`
    PrivateKeyEd25519 = 18 << 3,
    /// `M...`
    MuxedAccountEd25519 = 12 << 3,
    /// `T...`
    PreAuthTx = 19 << 3,
    /// `X...`
    HashX = 23 << 3,
    /// `P...`
    SignedPayloadEd25519 = 15 << 3,
}

impl Version {
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b if b == Self::PublicKeyEd25519 as u8 => Some(Self::PublicKeyEd25519),
            b if b == Self::PrivateKeyEd25519 as u8 => Some(Self::PrivateKeyEd25519),
            b if b == Self::MuxedAccountEd25519 as u8 => Some(Self::MuxedAccountEd25519),
            b if b == Self::PreAuthTx as u8 => Some(Self::PreAuthTx),
            b if b == Self::HashX as u8 => Some(Self::HashX),
            b if b == Self::SignedPayloadEd25519 as u8 => Some(Self::SignedPayloadEd25519),
            _ => None,
        }
    }
}

/// Encodes `payload` under `version` with a trailing checksum.
pub fn encode(version: Version, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 3);
    data.push(version as u8);
    data.extend_from_slice(payload);
    let crc = crc16_xmodem(&data);
    data.extend_from_slice(&crc.to_le_bytes());
    BASE32_NOPAD.encode(&data)
}

/// Decodes a StrKey into its version and raw payload, validating the
/// checksum and the canonical encoding.
pub fn decode(text: &str) -> Result<(Version, Vec<u8>), StrkeyError> {
    let data = BASE32_NOPAD
        .decode(text.as_bytes())
        .map_err(|_| StrkeyError::InvalidEncoding)?;
    // Reject alternative spellings of the same bytes.
    if BASE32_NOPAD.encode(&data) != text {
        return Err(StrkeyError::InvalidEncoding);
    }
    if data.len() < 3 {
        return Err(StrkeyError::InvalidLength(data.len()));
    }
    let (body, crc) = data.split_at(data.len() - 2);
    if crc16_xmodem(body).to_le_bytes() != crc {
        return Err(StrkeyError::InvalidChecksum);
    }
    let version = Version::from_byte(body[0]).ok_or(StrkeyError::InvalidVersion(body[0]))?;
    Ok((version, body[1..].to_vec()))
}

fn key_from(payload: &[u8]) -> Result<[u8; KEY_LEN], StrkeyError> {
    payload
        .try_into()
        .map_err(|_| StrkeyError::InvalidLength(payload.len()))
}

/// The payload of a signed-payload signer, at most
/// [`MAX_SIGNED_PAYLOAD_LEN`] bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignedPayload(Vec<u8>);

impl SignedPayload {
    pub fn new(bytes: &[u8]) -> Result<Self, StrkeyError> {
        Self::try_from(bytes.to_vec())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Length prefix of the payload's XDR `opaque<64>` form.
    fn len_prefix(&self) -> [u8; 4] {
        // Cannot truncate: the length is at most MAX_SIGNED_PAYLOAD_LEN.
        (self.0.len() as u32).to_be_bytes()
    }
}

impl TryFrom<Vec<u8>> for SignedPayload {
    type Error = StrkeyError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, StrkeyError> {
        if bytes.len() > MAX_SIGNED_PAYLOAD_LEN {
            return Err(StrkeyError::InvalidPayload);
        }
        Ok(Self(bytes))
    }
}

impl Deref for SignedPayload {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SignedPayload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A decoded StrKey.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strkey {
    PublicKeyEd25519([u8; KEY_LEN]),
    PrivateKeyEd25519([u8; KEY_LEN]),
    /// An account plus a 64-bit multiplexing id.
    MuxedAccountEd25519 { ed25519: [u8; KEY_LEN], id: u64 },
    /// Hash of a transaction authorized ahead of time.
    PreAuthTx([u8; KEY_LEN]),
    /// SHA-256 hash whose preimage acts as a signature.
    HashX([u8; KEY_LEN]),
    /// An account that must sign the given payload.
    SignedPayloadEd25519 {
        ed25519: [u8; KEY_LEN],
        payload: SignedPayload,
    },
}

impl Strkey {
    pub fn version(&self) -> Version {
        match self {
            Self::PublicKeyEd25519(_) => Version::PublicKeyEd25519,
            Self::PrivateKeyEd25519(_) => Version::PrivateKeyEd25519,
            Self::MuxedAccountEd25519 { .. } => Version::MuxedAccountEd25519,
            Self::PreAuthTx(_) => Version::PreAuthTx,
            Self::HashX(_) => Version::HashX,
            Self::SignedPayloadEd25519 { .. } => Version::SignedPayloadEd25519,
        }
    }

    fn payload(&self) -> Vec<u8> {
        match self {
            Self::PublicKeyEd25519(key)
            | Self::PrivateKeyEd25519(key)
            | Self::PreAuthTx(key)
            | Self::HashX(key) => key.to_vec(),
            Self::MuxedAccountEd25519 { ed25519, id } => {
                let mut out = ed25519.to_vec();
                out.extend_from_slice(&id.to_be_bytes());
                out
            }
            Self::SignedPayloadEd25519 { ed25519, payload } => {
                // The inner payload is laid out as XDR `opaque<64>`.
                let mut out = ed25519.to_vec();
                out.extend_from_slice(&payload.len_prefix());
                out.extend_from_slice(payload);
                out.resize(out.len() + (4 - payload.len() % 4) % 4, 0);
                out
            }
        }
    }

    /// Parses a StrKey of any kind.
    pub fn from_string(text: &str) -> Result<Self, StrkeyError> {
        let (version, payload) = decode(text)?;
        match version {
            Version::PublicKeyEd25519 => key_from(&payload).map(Self::PublicKeyEd25519),
            Version::PrivateKeyEd25519 => key_from(&payload).map(Self::PrivateKeyEd25519),
            Version::PreAuthTx => key_from(&payload).map(Self::PreAuthTx),
            Version::HashX => key_from(&payload).map(Self::HashX),
            Version::MuxedAccountEd25519 => {
                if payload.len() != KEY_LEN + 8 {
                    return Err(StrkeyError::InvalidLength(payload.len()));
                }
                let (key, id) = payload.split_at(KEY_LEN);
                let mut id_bytes = [0u8; 8];
                id_bytes.copy_from_slice(id);
                Ok(Self::MuxedAccountEd25519 {
                    ed25519: key_from(key)?,
                    id: u64::from_be_bytes(id_bytes),
                })
            }
            Version::SignedPayloadEd25519 => Self::signed_payload_from(&payload),
        }
    }

    fn signed_payload_from(raw: &[u8]) -> Result<Self, StrkeyError> {
        if raw.len() < KEY_LEN + 4 {
            return Err(StrkeyError::InvalidLength(raw.len()));
        }
        let (key, rest) = raw.split_at(KEY_LEN);
        let (len, rest) = rest.split_at(4);
        let len = u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize;
        if len > MAX_SIGNED_PAYLOAD_LEN || rest.len() != len + (4 - len % 4) % 4 {
            return Err(StrkeyError::InvalidPayload);
        }
        let (payload, padding) = rest.split_at(len);
        if padding.iter().any(|byte| *byte != 0) {
            return Err(StrkeyError::InvalidPayload);
        }
        Ok(Self::SignedPayloadEd25519 {
            ed25519: key_from(key)?,
            payload: SignedPayload::new(payload)?,
        })
    }
}

impl fmt::Display for Strkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.version(), &self.payload()))
    }
}

impl FromStr for Strkey {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}
