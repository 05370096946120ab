use stellar_xdr_codec::{xdr_struct, BoundedBytes};

/// Opaque value voted on by consensus.
pub type Value = BoundedBytes;

xdr_struct! {
    pub struct ScpBallot {
        pub counter: u32,
        pub value: Value,
    }
}
