#![cfg_attr(docsrs, feature(doc_cfg))]
//! Stellar XDR schema types.
//!
//! This crate models the part of the Stellar schema needed to build, sign and
//! submit transactions and to read a few pieces of consensus, overlay and
//! ledger data:
//!
//! - keys and accounts, with their StrKey text form;
//! - assets, memos, preconditions and a set of classic operations;
//! - [`Transaction`], [`TransactionV0`], [`FeeBumpTransaction`], their
//!   envelopes and the [`TransactionSignaturePayload`] that is signed;
//! - [`ScpBallot`], [`AuthenticatedMessage`], the ledger [`SkipList`] and
//!   [`AccountEntry`] with its versioned extension chain.
//!
//! Every type implements [`XdrCodec`](stellar_xdr_codec::XdrCodec).

#[macro_use]
mod macros;

mod asset;
mod keys;
mod ledger;
mod operation;
mod overlay;
mod primitives;
mod scp;
#[cfg(test)]
mod strategies;
mod transaction;

pub use {
    asset::*, keys::*, ledger::*, operation::*, overlay::*, primitives::*, scp::*,
    stellar_xdr_codec::XdrCodec, transaction::*,
};
