//! A small binary-codec type system for the Stellar XDR wire format.
//!
//! Values are big-endian and every item is padded to a multiple of four
//! bytes. Schema types are declared with [`xdr_enum!`], [`xdr_struct!`] and
//! [`xdr_union!`] and composed from the primitives, [`BoundedVec`],
//! [`BoundedBytes`], [`BoundedString`], fixed arrays and `Option`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bounded;
mod codec;
mod descriptor;
mod error;
mod fixed;
pub mod io;
mod limits;
mod macros;

pub use {
    bounded::{BoundedBytes, BoundedString, BoundedVec},
    codec::{XdrCodec, XdrDiscriminant},
    descriptor::{FieldDescriptor, Presence},
    error::XdrError,
    fixed::try_into_fixed,
    io::{XdrReader, XdrWriter},
    limits::{Limits, DEFAULT_DEPTH_LIMIT},
};
