use {
    stellar_signer::SignerError, stellar_xdr_codec::XdrError, stellar_xdr_types::EnvelopeType,
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The envelope has no transaction body yet.
    #[error("envelope has no transaction")]
    MissingTransaction,

    /// The envelope already carries a transaction; its signatures belong to
    /// that transaction.
    #[error("envelope already has a transaction")]
    TransactionAlreadySet,

    /// The signer cannot produce signatures (it holds no private key).
    #[error("signer cannot sign: no private key")]
    InvalidSigningKey,

    /// The operation is not defined for this envelope shape.
    #[error("operation not supported for {0} envelopes")]
    UnsupportedEnvelopeShape(EnvelopeType),

    #[error("xdr error: {0}")]
    Xdr(#[from] XdrError),

    #[error("signer error: {0}")]
    Signer(#[from] SignerError),
}
