use {stellar_address::StrkeyError, stellar_xdr_codec::XdrError, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error("signer has no private key")]
    MissingPrivateKey,

    #[error("invalid ed25519 key")]
    InvalidKey,

    #[error("strkey error: {0}")]
    Strkey(#[from] StrkeyError),

    #[error("xdr error: {0}")]
    Xdr(#[from] XdrError),
}
