use {
    crate::{Envelope, TransactionBody, TransactionError},
    log::debug,
    stellar_xdr_types::{
        FeeBumpTransaction, FeeBumpTransactionExt, FeeBumpTransactionInnerTx,
        MuxedAccount, TransactionV1Envelope,
    },
};

/// Construction of fee-bump transactions from signed envelopes.
pub trait FeeBump: Sized {
    /// Wraps the V1 envelope `inner`, signatures included, in a fee bump
    /// that pays `fee` from `fee_source`.
    ///
    /// The fee is not checked against the inner transaction's fee.
    fn wrap(inner: &Envelope, fee: i64, fee_source: MuxedAccount)
        -> Result<Self, TransactionError>;
}

impl FeeBump for FeeBumpTransaction {
    fn wrap(
        inner: &Envelope,
        fee: i64,
        fee_source: MuxedAccount,
    ) -> Result<Self, TransactionError> {
        let Some(TransactionBody::V1(tx)) = inner.transaction() else {
            return Err(TransactionError::UnsupportedEnvelopeShape(
                inner.envelope_type(),
            ));
        };
        debug!(
            "wrapping transaction with {} signatures in fee bump of {fee} from {fee_source}",
            inner.signatures().len()
        );
        Ok(Self {
            fee_source,
            fee,
            inner_tx: FeeBumpTransactionInnerTx::Tx(TransactionV1Envelope {
                tx: tx.clone(),
                signatures: inner.signatures().to_vec().try_into()?,
            }),
            ext: FeeBumpTransactionExt::V0,
        })
    }
}

impl Envelope {
    /// Encloses a fee bump of this envelope in a new, unsigned envelope.
    pub fn fee_bump(&self, fee: i64, fee_source: MuxedAccount) -> Result<Self, TransactionError> {
        FeeBumpTransaction::wrap(self, fee, fee_source).map(Self::enclose)
    }
}
