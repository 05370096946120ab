//! The signable transaction envelope.

use {
    crate::{Network, TransactionError},
    log::{debug, trace},
    stellar_signer::{Signer, SignerError},
    stellar_xdr_codec::XdrCodec,
    stellar_xdr_types::{
        DecoratedSignature, EnvelopeType, FeeBumpTransaction, FeeBumpTransactionEnvelope, Hash,
        PublicKey, Signatures, Transaction, TransactionEnvelope, TransactionSignaturePayload,
        TransactionSignaturePayloadTaggedTransaction, TransactionV0, TransactionV0Envelope,
        TransactionV1Envelope,
    },
};

/// The transaction carried by an [`Envelope`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionBody {
    V0(TransactionV0),
    V1(Transaction),
    FeeBump(FeeBumpTransaction),
}

impl TransactionBody {
    pub fn envelope_type(&self) -> EnvelopeType {
        match self {
            Self::V0(_) => EnvelopeType::TxV0,
            Self::V1(_) => EnvelopeType::Tx,
            Self::FeeBump(_) => EnvelopeType::TxFeeBump,
        }
    }

    /// The form that gets hashed and signed. V0 transactions are signed as
    /// their V1 equivalent.
    pub fn tagged_transaction(&self) -> TransactionSignaturePayloadTaggedTransaction {
        match self {
            Self::V0(tx) => TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone().into()),
            Self::V1(tx) => TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone()),
            Self::FeeBump(tx) => TransactionSignaturePayloadTaggedTransaction::TxFeeBump(tx.clone()),
        }
    }
}

impl From<TransactionV0> for TransactionBody {
    fn from(tx: TransactionV0) -> Self {
        Self::V0(tx)
    }
}

impl From<Transaction> for TransactionBody {
    fn from(tx: Transaction) -> Self {
        Self::V1(tx)
    }
}

impl From<FeeBumpTransaction> for TransactionBody {
    fn from(tx: FeeBumpTransaction) -> Self {
        Self::FeeBump(tx)
    }
}

/// A transaction plus the signatures collected for it.
///
/// An envelope starts out either empty, with only its shape fixed, or
/// enclosing a transaction. Adding signatures and signing produce new
/// envelopes; an existing value is never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    envelope_type: EnvelopeType,
    body: Option<TransactionBody>,
    signatures: Signatures,
}

impl Envelope {
    /// An envelope of the given shape with no transaction and no signatures.
    pub fn empty(envelope_type: EnvelopeType) -> Self {
        Self {
            envelope_type,
            body: None,
            signatures: Signatures::new(),
        }
    }

    /// Wraps `tx` in an unsigned envelope of the matching shape.
    pub fn enclose(tx: impl Into<TransactionBody>) -> Self {
        let body = tx.into();
        debug!("enclosing {} transaction", body.envelope_type());
        Self {
            envelope_type: body.envelope_type(),
            body: Some(body),
            signatures: Signatures::new(),
        }
    }

    /// Encloses `tx` in the legacy V0 shape.
    ///
    /// Only transactions with a plain ed25519 source and at most time bounds
    /// as preconditions have a V0 form.
    pub fn enclose_v0(tx: &Transaction) -> Result<Self, TransactionError> {
        tx.to_v0()
            .map(Self::enclose)
            .ok_or(TransactionError::UnsupportedEnvelopeShape(EnvelopeType::TxV0))
    }

    /// Sets the transaction of an empty envelope, keeping any signatures
    /// collected so far.
    ///
    /// The transaction must match the envelope's shape. An envelope that
    /// already has a transaction is never re-targeted.
    pub fn with_transaction(
        self,
        tx: impl Into<TransactionBody>,
    ) -> Result<Self, TransactionError> {
        if self.body.is_some() {
            return Err(TransactionError::TransactionAlreadySet);
        }
        let body = tx.into();
        if body.envelope_type() != self.envelope_type {
            return Err(TransactionError::UnsupportedEnvelopeShape(
                self.envelope_type,
            ));
        }
        Ok(Self {
            body: Some(body),
            ..self
        })
    }

    pub fn envelope_type(&self) -> EnvelopeType {
        self.envelope_type
    }

    pub fn transaction(&self) -> Option<&TransactionBody> {
        self.body.as_ref()
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        self.signatures.as_slice()
    }

    /// Returns a copy of this envelope with `signature` appended.
    pub fn add_signature(&self, signature: DecoratedSignature) -> Result<Self, TransactionError> {
        if !self.envelope_type.is_transaction() {
            return Err(TransactionError::UnsupportedEnvelopeShape(
                self.envelope_type,
            ));
        }
        Ok(Self {
            envelope_type: self.envelope_type,
            body: self.body.clone(),
            signatures: self.signatures.with(signature)?,
        })
    }

    fn body(&self) -> Result<&TransactionBody, TransactionError> {
        self.body.as_ref().ok_or(TransactionError::MissingTransaction)
    }

    /// The structure whose SHA-256 is signed on `network`.
    pub fn signature_payload(
        &self,
        network: &Network,
    ) -> Result<TransactionSignaturePayload, TransactionError> {
        Ok(TransactionSignaturePayload {
            network_id: network.network_id(),
            tagged_transaction: self.body()?.tagged_transaction(),
        })
    }

    /// The transaction hash on `network`.
    pub fn hash(&self, network: &Network) -> Result<Hash, TransactionError> {
        let hash = Hash::of_xdr(&self.signature_payload(network)?)?;
        trace!("{} transaction hash is {hash}", self.envelope_type);
        Ok(hash)
    }

    /// Signs the transaction hash on `network` and returns the envelope with
    /// the new signature appended.
    pub fn sign<S: Signer + ?Sized>(
        &self,
        network: &Network,
        signer: &S,
    ) -> Result<Self, TransactionError> {
        let hash = self.hash(network)?;
        debug!(
            "signing {} transaction {hash} with {}",
            self.envelope_type,
            signer.public_key()
        );
        let signature = signer
            .try_sign_decorated(hash.as_bytes())
            .map_err(|err| match err {
                SignerError::MissingPrivateKey => TransactionError::InvalidSigningKey,
                err => TransactionError::Signer(err),
            })?;
        self.add_signature(signature)
    }

    /// Whether any attached signature is a valid signature of the
    /// transaction hash on `network` by `public_key`.
    ///
    /// Signatures whose hint does not match the key are skipped without
    /// verification.
    pub fn verify_signature(&self, network: &Network, public_key: &PublicKey) -> bool {
        let Ok(hash) = self.hash(network) else {
            return false;
        };
        let hint = public_key.signature_hint();
        self.signatures
            .iter()
            .filter(|signature| signature.hint == hint)
            .any(|signature| {
                stellar_signer::verify(public_key, hash.as_bytes(), &signature.signature)
            })
    }

    /// The wire form of this envelope.
    pub fn to_transaction_envelope(&self) -> Result<TransactionEnvelope, TransactionError> {
        let signatures = self.signatures.clone();
        Ok(match self.body()?.clone() {
            TransactionBody::V0(tx) => {
                TransactionEnvelope::TxV0(TransactionV0Envelope { tx, signatures })
            }
            TransactionBody::V1(tx) => {
                TransactionEnvelope::Tx(TransactionV1Envelope { tx, signatures })
            }
            TransactionBody::FeeBump(tx) => {
                TransactionEnvelope::TxFeeBump(FeeBumpTransactionEnvelope { tx, signatures })
            }
        })
    }

    pub fn to_xdr(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(self.to_transaction_envelope()?.to_xdr()?)
    }

    pub fn to_xdr_base64(&self) -> Result<String, TransactionError> {
        Ok(self.to_transaction_envelope()?.to_xdr_base64()?)
    }

    pub fn from_xdr(bytes: &[u8]) -> Result<Self, TransactionError> {
        Ok(TransactionEnvelope::from_xdr(bytes)?.into())
    }

    pub fn from_xdr_base64(encoded: &str) -> Result<Self, TransactionError> {
        Ok(TransactionEnvelope::from_xdr_base64(encoded)?.into())
    }
}

impl From<TransactionEnvelope> for Envelope {
    fn from(envelope: TransactionEnvelope) -> Self {
        let (body, signatures) = match envelope {
            TransactionEnvelope::TxV0(envelope) => {
                (TransactionBody::V0(envelope.tx), envelope.signatures)
            }
            TransactionEnvelope::Tx(envelope) => {
                (TransactionBody::V1(envelope.tx), envelope.signatures)
            }
            TransactionEnvelope::TxFeeBump(envelope) => {
                (TransactionBody::FeeBump(envelope.tx), envelope.signatures)
            }
        };
        Self {
            envelope_type: body.envelope_type(),
            body: Some(body),
            signatures,
        }
    }
}

impl TryFrom<&Envelope> for TransactionEnvelope {
    type Error = TransactionError;

    fn try_from(envelope: &Envelope) -> Result<Self, Self::Error> {
        envelope.to_transaction_envelope()
    }
}
