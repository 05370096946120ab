use {
    sha2::{Digest, Sha256},
    stellar_xdr_codec::{xdr_struct, xdr_union, BoundedBytes, BoundedString, XdrCodec, XdrError},
};

impl_fixed_opaque!(
    /// SHA-256 digest.
    TYPE = Hash,
    LEN = 32
);
impl_fixed_opaque!(
    /// Raw 256-bit value, used for ed25519 keys.
    TYPE = Uint256,
    LEN = 32
);
impl_fixed_opaque!(
    /// Last four bytes of the signing public key.
    TYPE = SignatureHint,
    LEN = 4
);
impl_fixed_opaque!(
    /// Master weight followed by the low, medium and high thresholds.
    TYPE = Thresholds,
    LEN = 4
);

pub type Signature = BoundedBytes<64>;
pub type String32 = BoundedString<32>;
pub type String64 = BoundedString<64>;
pub type DataValue = BoundedBytes<64>;
pub type SequenceNumber = i64;
pub type TimePoint = u64;
pub type Duration = u64;
pub type PoolId = Hash;

impl Hash {
    /// SHA-256 of `data`.
    pub fn digest(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// SHA-256 of the XDR encoding of `value`.
    pub fn of_xdr<T: XdrCodec>(value: &T) -> Result<Self, XdrError> {
        value.to_xdr().map(|bytes| Self::digest(&bytes))
    }
}

impl Thresholds {
    pub const fn master_weight(&self) -> u8 {
        self.0[0]
    }

    pub const fn low(&self) -> u8 {
        self.0[1]
    }

    pub const fn medium(&self) -> u8 {
        self.0[2]
    }

    pub const fn high(&self) -> u8 {
        self.0[3]
    }
}

xdr_union! {
    /// Reserved slot for future fields; only the empty arm exists today.
    pub enum ExtensionPoint switch (i32) {
        V0 = 0,
    }
}

impl_ext_default!(ExtensionPoint);

xdr_struct! {
    /// A signature tagged with the hint of the key that produced it.
    pub struct DecoratedSignature {
        pub hint: SignatureHint,
        pub signature: Signature,
    }
}
