#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use {log::trace, std::borrow::Cow, stellar_xdr_types::Hash};

/// A Stellar network, identified by its passphrase.
///
/// Signatures are scoped to a network: the same transaction hashes
/// differently under different passphrases.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Network {
    passphrase: Cow<'static, str>,
}

impl Network {
    pub const PUBLIC: Self = Self::from_static("Public Global Stellar Network ; September 2015");
    pub const TESTNET: Self = Self::from_static("Test SDF Network ; September 2015");
    pub const FUTURENET: Self = Self::from_static("Test SDF Future Network ; October 2022");
    pub const STANDALONE: Self = Self::from_static("Standalone Network ; February 2017");

    const fn from_static(passphrase: &'static str) -> Self {
        Self {
            passphrase: Cow::Borrowed(passphrase),
        }
    }

    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: Cow::Owned(passphrase.into()),
        }
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// SHA-256 of the passphrase.
    pub fn network_id(&self) -> Hash {
        let id = Hash::digest(self.passphrase.as_bytes());
        trace!("network id for {:?} is {id}", self.passphrase);
        id
    }
}
