//! Public keys, account ids, muxed accounts and signer keys.
//!
//! All of them have a StrKey text form (`G...`, `M...`, `T...`, `X...`,
//! `P...`) through [`FromStr`] and [`Display`](fmt::Display).

use {
    crate::{SignatureHint, Uint256},
    core::{fmt, str::FromStr},
    stellar_address::{SignedPayload, Strkey, StrkeyError},
    stellar_xdr_codec::{xdr_enum, xdr_struct, xdr_union, BoundedBytes},
};

xdr_enum! {
    pub enum CryptoKeyType {
        Ed25519 = 0,
        PreAuthTx = 1,
        HashX = 2,
        Ed25519SignedPayload = 3,
        MuxedEd25519 = 256,
    }
}

xdr_enum! {
    pub enum PublicKeyType {
        PublicKeyTypeEd25519 = 0,
    }
}

xdr_enum! {
    pub enum SignerKeyType {
        Ed25519 = 0,
        PreAuthTx = 1,
        HashX = 2,
        Ed25519SignedPayload = 3,
    }
}

xdr_union! {
    pub enum PublicKey switch (PublicKeyType) {
        PublicKeyTypeEd25519(Uint256) = PublicKeyType::PublicKeyTypeEd25519,
    }
}

pub type AccountId = PublicKey;

xdr_struct! {
    /// Muxed account body. The id comes before the key on the wire, unlike
    /// the StrKey form.
    pub struct MuxedAccountMed25519 {
        pub id: u64,
        pub ed25519: Uint256,
    }
}

xdr_union! {
    pub enum MuxedAccount switch (CryptoKeyType) {
        Ed25519(Uint256) = CryptoKeyType::Ed25519,
        MuxedEd25519(MuxedAccountMed25519) = CryptoKeyType::MuxedEd25519,
    }
}

xdr_struct! {
    pub struct SignerKeyEd25519SignedPayload {
        pub ed25519: Uint256,
        pub payload: BoundedBytes<64>,
    }
}

xdr_union! {
    pub enum SignerKey switch (SignerKeyType) {
        Ed25519(Uint256) = SignerKeyType::Ed25519,
        PreAuthTx(Uint256) = SignerKeyType::PreAuthTx,
        HashX(Uint256) = SignerKeyType::HashX,
        Ed25519SignedPayload(SignerKeyEd25519SignedPayload) = SignerKeyType::Ed25519SignedPayload,
    }
}

impl PublicKey {
    pub const fn from_ed25519(key: [u8; 32]) -> Self {
        Self::PublicKeyTypeEd25519(Uint256(key))
    }

    pub const fn ed25519(&self) -> &[u8; 32] {
        match self {
            Self::PublicKeyTypeEd25519(key) => &key.0,
        }
    }

    /// Last four bytes of the key, used to tag decorated signatures.
    pub fn signature_hint(&self) -> SignatureHint {
        let key = self.ed25519();
        SignatureHint([key[28], key[29], key[30], key[31]])
    }
}

impl MuxedAccount {
    /// The underlying ed25519 account key, dropping any multiplexing id.
    pub const fn ed25519(&self) -> &[u8; 32] {
        match self {
            Self::Ed25519(key) => &key.0,
            Self::MuxedEd25519(muxed) => &muxed.ed25519.0,
        }
    }

    pub const fn id(&self) -> Option<u64> {
        match self {
            Self::Ed25519(_) => None,
            Self::MuxedEd25519(muxed) => Some(muxed.id),
        }
    }

    pub const fn account_id(&self) -> AccountId {
        PublicKey::from_ed25519(*self.ed25519())
    }
}

impl From<PublicKey> for MuxedAccount {
    fn from(key: PublicKey) -> Self {
        Self::Ed25519(Uint256(*key.ed25519()))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Strkey::PublicKeyEd25519(*self.ed25519()), f)
    }
}

impl FromStr for PublicKey {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Strkey::from_string(s)? {
            Strkey::PublicKeyEd25519(key) => Ok(Self::from_ed25519(key)),
            other => Err(StrkeyError::InvalidVersion(other.version() as u8)),
        }
    }
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strkey = match self {
            Self::Ed25519(key) => Strkey::PublicKeyEd25519(key.0),
            Self::MuxedEd25519(muxed) => Strkey::MuxedAccountEd25519 {
                ed25519: muxed.ed25519.0,
                id: muxed.id,
            },
        };
        fmt::Display::fmt(&strkey, f)
    }
}

impl FromStr for MuxedAccount {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Strkey::from_string(s)? {
            Strkey::PublicKeyEd25519(key) => Ok(Self::Ed25519(Uint256(key))),
            Strkey::MuxedAccountEd25519 { ed25519, id } => {
                Ok(Self::MuxedEd25519(MuxedAccountMed25519 {
                    id,
                    ed25519: Uint256(ed25519),
                }))
            }
            other => Err(StrkeyError::InvalidVersion(other.version() as u8)),
        }
    }
}

impl fmt::Display for SignerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strkey = match self {
            Self::Ed25519(key) => Strkey::PublicKeyEd25519(key.0),
            Self::PreAuthTx(hash) => Strkey::PreAuthTx(hash.0),
            Self::HashX(hash) => Strkey::HashX(hash.0),
            Self::Ed25519SignedPayload(signed) => Strkey::SignedPayloadEd25519 {
                ed25519: signed.ed25519.0,
                payload: SignedPayload::new(&signed.payload).map_err(|_| fmt::Error)?,
            },
        };
        fmt::Display::fmt(&strkey, f)
    }
}

impl FromStr for SignerKey {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Strkey::from_string(s)? {
            Strkey::PublicKeyEd25519(key) => Ok(Self::Ed25519(Uint256(key))),
            Strkey::PreAuthTx(hash) => Ok(Self::PreAuthTx(Uint256(hash))),
            Strkey::HashX(hash) => Ok(Self::HashX(Uint256(hash))),
            Strkey::SignedPayloadEd25519 { ed25519, payload } => {
                let payload =
                    BoundedBytes::of(payload.into_vec()).map_err(|_| StrkeyError::InvalidPayload)?;
                Ok(Self::Ed25519SignedPayload(SignerKeyEd25519SignedPayload {
                    ed25519: Uint256(ed25519),
                    payload,
                }))
            }
            other => Err(StrkeyError::InvalidVersion(other.version() as u8)),
        }
    }
}
