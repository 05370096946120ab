//! Abstractions for Stellar transaction signers.
//!
//! [`Signer`] is what the envelope protocol needs from a key: its public
//! half and the ability to sign a 32-byte transaction hash. [`Keypair`] is
//! the ed25519 implementation; it may hold only a public key, in which case
//! it can verify but not sign.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod keypair;

pub use {
    error::SignerError,
    keypair::{verify, Keypair},
};
use {
    stellar_xdr_codec::BoundedBytes,
    stellar_xdr_types::{DecoratedSignature, PublicKey, SignatureHint},
};

/// The `Signer` trait declares operations that all transaction signers must
/// support.
pub trait Signer {
    /// The public key that signatures from this signer verify against.
    fn public_key(&self) -> PublicKey;

    /// Signs `message`, returning the raw 64-byte ed25519 signature.
    fn try_sign_message(&self, message: &[u8]) -> Result<[u8; 64], SignerError>;

    fn signature_hint(&self) -> SignatureHint {
        self.public_key().signature_hint()
    }

    /// Signs `message` and tags the signature with this signer's hint.
    fn try_sign_decorated(&self, message: &[u8]) -> Result<DecoratedSignature, SignerError> {
        let signature = self.try_sign_message(message)?;
        Ok(DecoratedSignature {
            hint: self.signature_hint(),
            signature: BoundedBytes::of(signature.to_vec())?,
        })
    }
}

impl<T: Signer + ?Sized> Signer for &T {
    fn public_key(&self) -> PublicKey {
        (**self).public_key()
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<[u8; 64], SignerError> {
        (**self).try_sign_message(message)
    }
}

impl<T: Signer + ?Sized> Signer for Box<T> {
    fn public_key(&self) -> PublicKey {
        (**self).public_key()
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<[u8; 64], SignerError> {
        (**self).try_sign_message(message)
    }
}
