//! Transactions, their envelopes and the payload that gets signed.

use {
    crate::{
        AccountId, Asset, DecoratedSignature, Duration, Hash, MuxedAccount, Operation, PoolId,
        SequenceNumber, SignerKey, TimePoint, Uint256,
    },
    stellar_xdr_codec::{xdr_enum, xdr_struct, xdr_union, BoundedString, BoundedVec},
};

/// Maximum number of operations in one transaction.
pub const MAX_OPS_PER_TX: u32 = 100;

/// Maximum number of signatures attached to one envelope.
pub const MAX_SIGNATURES: u32 = 20;

pub type Operations = BoundedVec<Operation, MAX_OPS_PER_TX>;
pub type Signatures = BoundedVec<DecoratedSignature, MAX_SIGNATURES>;

xdr_enum! {
    pub enum EnvelopeType {
        TxV0 = 0,
        Scp = 1,
        Tx = 2,
        Auth = 3,
        Scpvalue = 4,
        TxFeeBump = 5,
        OpId = 6,
        PoolRevokeOpId = 7,
        ContractId = 8,
        SorobanAuthorization = 9,
    }
}

impl EnvelopeType {
    /// Whether envelopes of this type carry a transaction and signatures.
    pub const fn is_transaction(self) -> bool {
        matches!(self, Self::TxV0 | Self::Tx | Self::TxFeeBump)
    }
}

xdr_enum! {
    pub enum MemoType {
        None = 0,
        Text = 1,
        Id = 2,
        Hash = 3,
        Return = 4,
    }
}

xdr_union! {
    pub enum Memo switch (MemoType) {
        None = MemoType::None,
        Text(BoundedString<28>) = MemoType::Text,
        Id(u64) = MemoType::Id,
        Hash(Hash) = MemoType::Hash,
        Return(Hash) = MemoType::Return,
    }
}

impl Default for Memo {
    fn default() -> Self {
        Self::None
    }
}

xdr_struct! {
    pub struct TimeBounds {
        pub min_time: TimePoint,
        /// Zero means no upper bound.
        pub max_time: TimePoint,
    }
}

xdr_struct! {
    pub struct LedgerBounds {
        pub min_ledger: u32,
        pub max_ledger: u32,
    }
}

xdr_struct! {
    pub struct PreconditionsV2 with builder PreconditionsV2Builder {
        pub time_bounds: Option<TimeBounds> = Default,
        pub ledger_bounds: Option<LedgerBounds> = Default,
        pub min_seq_num: Option<SequenceNumber> = Default,
        pub min_seq_age: Duration = Default,
        pub min_seq_ledger_gap: u32 = Default,
        pub extra_signers: BoundedVec<SignerKey, 2> = Default,
    }
}

xdr_enum! {
    pub enum PreconditionType {
        None = 0,
        Time = 1,
        V2 = 2,
    }
}

xdr_union! {
    pub enum Preconditions switch (PreconditionType) {
        None = PreconditionType::None,
        Time(TimeBounds) = PreconditionType::Time,
        V2(PreconditionsV2) = PreconditionType::V2,
    }
}

impl Default for Preconditions {
    fn default() -> Self {
        Self::None
    }
}

impl Preconditions {
    pub fn time_bounds(&self) -> Option<&TimeBounds> {
        match self {
            Self::None => None,
            Self::Time(bounds) => Some(bounds),
            Self::V2(v2) => v2.time_bounds.as_ref(),
        }
    }
}

xdr_union! {
    pub enum TransactionV0Ext switch (i32) {
        V0 = 0,
    }
}

xdr_union! {
    /// Arm 1 (contract resource data) is not modelled and fails to decode.
    pub enum TransactionExt switch (i32) {
        V0 = 0,
    }
}

xdr_union! {
    pub enum FeeBumpTransactionExt switch (i32) {
        V0 = 0,
    }
}

impl_ext_default!(TransactionV0Ext, TransactionExt, FeeBumpTransactionExt);

xdr_struct! {
    /// Pre-protocol-13 transaction: the source is a bare ed25519 key and the
    /// only precondition is an optional time window.
    pub struct TransactionV0 with builder TransactionV0Builder {
        pub source_account_ed25519: Uint256,
        pub fee: u32,
        pub seq_num: SequenceNumber,
        pub time_bounds: Option<TimeBounds> = Default,
        pub memo: Memo = Default,
        pub operations: Operations = Default,
        pub ext: TransactionV0Ext = Default,
    }
}

xdr_struct! {
    pub struct Transaction with builder TransactionBuilder {
        pub source_account: MuxedAccount,
        /// Total fee in stroops across all operations.
        pub fee: u32,
        pub seq_num: SequenceNumber,
        pub cond: Preconditions = Default,
        pub memo: Memo = Default,
        pub operations: Operations = Default,
        pub ext: TransactionExt = Default,
    }
}

impl From<TransactionV0> for Transaction {
    fn from(tx: TransactionV0) -> Self {
        Self {
            source_account: MuxedAccount::Ed25519(tx.source_account_ed25519),
            fee: tx.fee,
            seq_num: tx.seq_num,
            cond: tx
                .time_bounds
                .map_or(Preconditions::None, Preconditions::Time),
            memo: tx.memo,
            operations: tx.operations,
            ext: TransactionExt::V0,
        }
    }
}

impl Transaction {
    /// The legacy form of this transaction, if it has one: the source must
    /// not be muxed and the preconditions must be at most a time window.
    pub fn to_v0(&self) -> Option<TransactionV0> {
        let source_account_ed25519 = match &self.source_account {
            MuxedAccount::Ed25519(key) => *key,
            MuxedAccount::MuxedEd25519(_) => return None,
        };
        let time_bounds = match &self.cond {
            Preconditions::None => None,
            Preconditions::Time(bounds) => Some(bounds.clone()),
            Preconditions::V2(_) => return None,
        };
        Some(TransactionV0 {
            source_account_ed25519,
            fee: self.fee,
            seq_num: self.seq_num,
            time_bounds,
            memo: self.memo.clone(),
            operations: self.operations.clone(),
            ext: TransactionV0Ext::V0,
        })
    }
}

xdr_struct! {
    pub struct TransactionV0Envelope {
        pub tx: TransactionV0,
        pub signatures: Signatures,
    }
}

xdr_struct! {
    pub struct TransactionV1Envelope {
        pub tx: Transaction,
        pub signatures: Signatures,
    }
}

xdr_union! {
    /// A fee bump may only wrap a V1 envelope.
    pub enum FeeBumpTransactionInnerTx switch (EnvelopeType) {
        Tx(TransactionV1Envelope) = EnvelopeType::Tx,
    }
}

xdr_struct! {
    pub struct FeeBumpTransaction with builder FeeBumpTransactionBuilder {
        pub fee_source: MuxedAccount,
        pub fee: i64,
        pub inner_tx: FeeBumpTransactionInnerTx,
        pub ext: FeeBumpTransactionExt = Default,
    }
}

xdr_struct! {
    pub struct FeeBumpTransactionEnvelope {
        pub tx: FeeBumpTransaction,
        pub signatures: Signatures,
    }
}

xdr_union! {
    pub enum TransactionEnvelope switch (EnvelopeType) {
        TxV0(TransactionV0Envelope) = EnvelopeType::TxV0,
        Tx(TransactionV1Envelope) = EnvelopeType::Tx,
        TxFeeBump(FeeBumpTransactionEnvelope) = EnvelopeType::TxFeeBump,
    }
}

impl TransactionEnvelope {
    pub fn signatures(&self) -> &Signatures {
        match self {
            Self::TxV0(envelope) => &envelope.signatures,
            Self::Tx(envelope) => &envelope.signatures,
            Self::TxFeeBump(envelope) => &envelope.signatures,
        }
    }
}

xdr_union! {
    /// What is actually signed: V0 transactions are signed in their V1 form.
    pub enum TransactionSignaturePayloadTaggedTransaction switch (EnvelopeType) {
        Tx(Transaction) = EnvelopeType::Tx,
        TxFeeBump(FeeBumpTransaction) = EnvelopeType::TxFeeBump,
    }
}

xdr_struct! {
    pub struct TransactionSignaturePayload {
        pub network_id: Hash,
        pub tagged_transaction: TransactionSignaturePayloadTaggedTransaction,
    }
}

xdr_struct! {
    pub struct HashIdPreimageOperationId {
        pub source_account: AccountId,
        pub seq_num: SequenceNumber,
        pub op_num: u32,
    }
}

xdr_struct! {
    pub struct HashIdPreimageRevokeId {
        pub source_account: AccountId,
        pub seq_num: SequenceNumber,
        pub op_num: u32,
        pub liquidity_pool_id: PoolId,
        pub asset: Asset,
    }
}

xdr_union! {
    /// Preimages whose SHA-256 yields deterministic ids (claimable balances,
    /// revoked pool shares).
    pub enum HashIdPreimage switch (EnvelopeType) {
        OpId(HashIdPreimageOperationId) = EnvelopeType::OpId,
        PoolRevokeOpId(HashIdPreimageRevokeId) = EnvelopeType::PoolRevokeOpId,
    }
}

impl HashIdPreimage {
    pub fn hash(&self) -> Result<Hash, stellar_xdr_codec::XdrError> {
        Hash::of_xdr(self)
    }
}
