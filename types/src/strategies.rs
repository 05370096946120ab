//! Proptest strategies for schema values.

use {
    crate::*,
    proptest::{collection::vec, option, prelude::*},
    stellar_xdr_codec::{BoundedBytes, BoundedString, BoundedVec},
};

fn bytes<const MAX: u32>() -> impl Strategy<Value = BoundedBytes<MAX>> {
    vec(any::<u8>(), 0..=MAX as usize).prop_map(|bytes| BoundedBytes::of(bytes).unwrap())
}

fn text<const MAX: u32>() -> impl Strategy<Value = BoundedString<MAX>> {
    vec(any::<u8>(), 0..=MAX as usize).prop_map(|bytes| BoundedString::try_from(bytes).unwrap())
}

fn bounded<T: Clone + core::fmt::Debug, const MAX: u32>(
    element: impl Strategy<Value = T>,
    max: usize,
) -> impl Strategy<Value = BoundedVec<T, MAX>> {
    vec(element, 0..=max).prop_map(|items| BoundedVec::of(items).unwrap())
}

fn uint256() -> impl Strategy<Value = Uint256> {
    any::<[u8; 32]>().prop_map(Uint256)
}

fn hash() -> impl Strategy<Value = Hash> {
    any::<[u8; 32]>().prop_map(Hash)
}

pub fn account_id() -> impl Strategy<Value = AccountId> {
    uint256().prop_map(PublicKey::PublicKeyTypeEd25519)
}

pub fn muxed_account() -> impl Strategy<Value = MuxedAccount> {
    prop_oneof![
        uint256().prop_map(MuxedAccount::Ed25519),
        (any::<u64>(), uint256()).prop_map(|(id, ed25519)| {
            MuxedAccount::MuxedEd25519(MuxedAccountMed25519 { id, ed25519 })
        }),
    ]
}

pub fn signer_key() -> impl Strategy<Value = SignerKey> {
    prop_oneof![
        uint256().prop_map(SignerKey::Ed25519),
        uint256().prop_map(SignerKey::PreAuthTx),
        uint256().prop_map(SignerKey::HashX),
        (uint256(), bytes::<64>()).prop_map(|(ed25519, payload)| {
            SignerKey::Ed25519SignedPayload(SignerKeyEd25519SignedPayload { ed25519, payload })
        }),
    ]
}

pub fn asset() -> impl Strategy<Value = Asset> {
    prop_oneof![
        Just(Asset::Native),
        (any::<[u8; 4]>(), account_id()).prop_map(|(code, issuer)| {
            Asset::CreditAlphanum4(AlphaNum4 {
                asset_code: AssetCode4(code),
                issuer,
            })
        }),
        (any::<[u8; 12]>(), account_id()).prop_map(|(code, issuer)| {
            Asset::CreditAlphanum12(AlphaNum12 {
                asset_code: AssetCode12(code),
                issuer,
            })
        }),
    ]
}

pub fn memo() -> impl Strategy<Value = Memo> {
    prop_oneof![
        Just(Memo::None),
        text::<28>().prop_map(Memo::Text),
        any::<u64>().prop_map(Memo::Id),
        hash().prop_map(Memo::Hash),
        hash().prop_map(Memo::Return),
    ]
}

fn time_bounds() -> impl Strategy<Value = TimeBounds> {
    (any::<u64>(), any::<u64>()).prop_map(|(min_time, max_time)| TimeBounds { min_time, max_time })
}

fn ledger_bounds() -> impl Strategy<Value = LedgerBounds> {
    (any::<u32>(), any::<u32>()).prop_map(|(min_ledger, max_ledger)| LedgerBounds {
        min_ledger,
        max_ledger,
    })
}

pub fn preconditions() -> impl Strategy<Value = Preconditions> {
    let v2 = (
        option::of(time_bounds()),
        option::of(ledger_bounds()),
        option::of(any::<i64>()),
        any::<u64>(),
        any::<u32>(),
        bounded(signer_key(), 2),
    )
        .prop_map(
            |(time_bounds, ledger_bounds, min_seq_num, min_seq_age, min_seq_ledger_gap, extra_signers)| {
                PreconditionsV2 {
                    time_bounds,
                    ledger_bounds,
                    min_seq_num,
                    min_seq_age,
                    min_seq_ledger_gap,
                    extra_signers,
                }
            },
        );
    prop_oneof![
        Just(Preconditions::None),
        time_bounds().prop_map(Preconditions::Time),
        v2.prop_map(Preconditions::V2),
    ]
}

pub fn operation() -> impl Strategy<Value = Operation> {
    let body = prop_oneof![
        (account_id(), any::<i64>()).prop_map(|(destination, starting_balance)| {
            OperationBody::CreateAccount(CreateAccountOp {
                destination,
                starting_balance,
            })
        }),
        (muxed_account(), asset(), any::<i64>()).prop_map(|(destination, asset, amount)| {
            OperationBody::Payment(PaymentOp {
                destination,
                asset,
                amount,
            })
        }),
        muxed_account().prop_map(OperationBody::AccountMerge),
        Just(OperationBody::Inflation),
        (text::<64>(), option::of(bytes::<64>())).prop_map(|(data_name, data_value)| {
            OperationBody::ManageData(ManageDataOp {
                data_name,
                data_value,
            })
        }),
        any::<i64>().prop_map(|bump_to| OperationBody::BumpSequence(BumpSequenceOp { bump_to })),
        account_id().prop_map(|sponsored_id| {
            OperationBody::BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp {
                sponsored_id,
            })
        }),
        Just(OperationBody::EndSponsoringFutureReserves),
    ];
    (option::of(muxed_account()), body)
        .prop_map(|(source_account, body)| Operation { source_account, body })
}

pub fn transaction() -> impl Strategy<Value = Transaction> {
    (
        muxed_account(),
        any::<u32>(),
        any::<i64>(),
        preconditions(),
        memo(),
        bounded(operation(), 3),
    )
        .prop_map(|(source_account, fee, seq_num, cond, memo, operations)| Transaction {
            source_account,
            fee,
            seq_num,
            cond,
            memo,
            operations,
            ext: TransactionExt::V0,
        })
}

fn signatures() -> impl Strategy<Value = Signatures> {
    let signature = (any::<[u8; 4]>(), bytes::<64>()).prop_map(|(hint, signature)| {
        DecoratedSignature {
            hint: SignatureHint(hint),
            signature,
        }
    });
    bounded(signature, 3)
}

pub fn transaction_envelope() -> impl Strategy<Value = TransactionEnvelope> {
    let v0 = (
        uint256(),
        any::<u32>(),
        any::<i64>(),
        option::of(time_bounds()),
        memo(),
        bounded(operation(), 3),
        signatures(),
    )
        .prop_map(
            |(source_account_ed25519, fee, seq_num, time_bounds, memo, operations, signatures)| {
                TransactionEnvelope::TxV0(TransactionV0Envelope {
                    tx: TransactionV0 {
                        source_account_ed25519,
                        fee,
                        seq_num,
                        time_bounds,
                        memo,
                        operations,
                        ext: TransactionV0Ext::V0,
                    },
                    signatures,
                })
            },
        );
    let v1 = (transaction(), signatures()).prop_map(|(tx, signatures)| {
        TransactionEnvelope::Tx(TransactionV1Envelope { tx, signatures })
    });
    let fee_bump = (
        muxed_account(),
        any::<i64>(),
        transaction(),
        signatures(),
        signatures(),
    )
        .prop_map(|(fee_source, fee, tx, inner_signatures, signatures)| {
            TransactionEnvelope::TxFeeBump(FeeBumpTransactionEnvelope {
                tx: FeeBumpTransaction {
                    fee_source,
                    fee,
                    inner_tx: FeeBumpTransactionInnerTx::Tx(TransactionV1Envelope {
                        tx,
                        signatures: inner_signatures,
                    }),
                    ext: FeeBumpTransactionExt::V0,
                },
                signatures,
            })
        });
    prop_oneof![v0, v1, fee_bump]
}

fn account_entry_ext() -> impl Strategy<Value = AccountEntryExt> {
    let v3 = (any::<u32>(), any::<u64>()).prop_map(|(seq_ledger, seq_time)| {
        AccountEntryExtensionV3 {
            ext: ExtensionPoint::V0,
            seq_ledger,
            seq_time,
        }
    });
    let v2_ext = prop_oneof![
        Just(AccountEntryExtensionV2Ext::V0),
        v3.prop_map(AccountEntryExtensionV2Ext::V3),
    ];
    let v2 = (
        any::<u32>(),
        any::<u32>(),
        bounded(option::of(account_id()), 3),
        v2_ext,
    )
        .prop_map(|(num_sponsored, num_sponsoring, signer_sponsoring_ids, ext)| {
            AccountEntryExtensionV2 {
                num_sponsored,
                num_sponsoring,
                signer_sponsoring_ids,
                ext,
            }
        });
    let v1_ext = prop_oneof![
        Just(AccountEntryExtensionV1Ext::V0),
        v2.prop_map(AccountEntryExtensionV1Ext::V2),
    ];
    let v1 = (any::<i64>(), any::<i64>(), v1_ext).prop_map(|(buying, selling, ext)| {
        AccountEntryExtensionV1 {
            liabilities: Liabilities { buying, selling },
            ext,
        }
    });
    prop_oneof![
        Just(AccountEntryExt::V0),
        v1.prop_map(AccountEntryExt::V1),
    ]
}

pub fn account_entry() -> impl Strategy<Value = AccountEntry> {
    let signer = (signer_key(), any::<u32>()).prop_map(|(key, weight)| Signer { key, weight });
    (
        account_id(),
        any::<i64>(),
        any::<i64>(),
        any::<u32>(),
        option::of(account_id()),
        any::<u32>(),
        text::<32>(),
        any::<[u8; 4]>(),
        bounded(signer, 3),
        account_entry_ext(),
    )
        .prop_map(
            |(
                account_id,
                balance,
                seq_num,
                num_sub_entries,
                inflation_dest,
                flags,
                home_domain,
                thresholds,
                signers,
                ext,
            )| AccountEntry {
                account_id,
                balance,
                seq_num,
                num_sub_entries,
                inflation_dest,
                flags,
                home_domain,
                thresholds: Thresholds(thresholds),
                signers,
                ext,
            },
        )
}
