//! Stellar transaction envelopes.
//!
//! An [`Envelope`] holds a transaction in one of its three wire shapes
//! (legacy V0, V1, fee bump) together with up to twenty decorated
//! signatures. The transaction hash that gets signed is the SHA-256 of a
//! [`TransactionSignaturePayload`](stellar_xdr_types::TransactionSignaturePayload),
//! which binds the transaction to a [`Network`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod envelope;
mod error;
mod fee_bump;
mod network;

pub use {
    envelope::{Envelope, TransactionBody},
    error::TransactionError,
    fee_bump::FeeBump,
    network::Network,
};
