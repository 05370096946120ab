use {
    crate::{Signer, SignerError},
    core::fmt,
    ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier, VerifyingKey},
    log::trace,
    rand::rngs::OsRng,
    stellar_address::Strkey,
    stellar_xdr_types::{DecoratedSignature, PublicKey},
};

/// An ed25519 key pair whose private half is optional.
#[derive(Clone)]
pub struct Keypair {
    verifying: VerifyingKey,
    signing: Option<SigningKey>,
}

impl Keypair {
    fn from_signing(signing: SigningKey) -> Self {
        Self {
            verifying: signing.verifying_key(),
            signing: Some(signing),
        }
    }

    /// Derives the key pair from a raw 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing(SigningKey::from_bytes(seed))
    }

    /// Parses an `S...` secret seed.
    pub fn from_secret_seed(seed: &str) -> Result<Self, SignerError> {
        match Strkey::from_string(seed)? {
            Strkey::PrivateKeyEd25519(seed) => Ok(Self::from_seed(&seed)),
            _ => Err(SignerError::InvalidKey),
        }
    }

    /// A verify-only key pair.
    pub fn from_public_key(public_key: &PublicKey) -> Result<Self, SignerError> {
        let verifying =
            VerifyingKey::from_bytes(public_key.ed25519()).map_err(|_| SignerError::InvalidKey)?;
        Ok(Self {
            verifying,
            signing: None,
        })
    }

    /// A verify-only key pair from a `G...` account id.
    pub fn from_account_id(account_id: &str) -> Result<Self, SignerError> {
        let public_key = account_id.parse::<PublicKey>()?;
        Self::from_public_key(&public_key)
    }

    pub fn random() -> Self {
        Self::from_signing(SigningKey::generate(&mut OsRng))
    }

    pub fn can_sign(&self) -> bool {
        self.signing.is_some()
    }

    /// `G...` form of the public key.
    pub fn account_id(&self) -> String {
        Strkey::PublicKeyEd25519(self.verifying.to_bytes()).to_string()
    }

    /// `S...` form of the seed, if the private key is held.
    pub fn secret_seed(&self) -> Option<String> {
        self.signing
            .as_ref()
            .map(|signing| Strkey::PrivateKeyEd25519(signing.to_bytes()).to_string())
    }

    pub fn sign(&self, message: &[u8]) -> Result<[u8; 64], SignerError> {
        let signing = self.signing.as_ref().ok_or(SignerError::MissingPrivateKey)?;
        trace!("signing {} bytes with {}", message.len(), self.account_id());
        Ok(signing.sign(message).to_bytes())
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        Signature::from_slice(signature)
            .map(|signature| self.verifying.verify(message, &signature).is_ok())
            .unwrap_or(false)
    }

    /// Checks the hint first, then the signature itself.
    pub fn verify_decorated(&self, message: &[u8], signature: &DecoratedSignature) -> bool {
        signature.hint == self.signature_hint() && self.verify(message, &signature.signature)
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("account_id", &self.account_id())
            .field("can_sign", &self.can_sign())
            .finish()
    }
}

impl Signer for Keypair {
    fn public_key(&self) -> PublicKey {
        PublicKey::from_ed25519(self.verifying.to_bytes())
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<[u8; 64], SignerError> {
        self.sign(message)
    }
}

/// Verifies an ed25519 `signature` of `message` by `public_key`.
///
/// Malformed keys and signatures simply fail verification.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
    Keypair::from_public_key(public_key)
        .map(|keypair| keypair.verify(message, signature))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, test_case::test_case};

    const SEED: &str = "SAAQEAYEAUDAOCAJBIFQYDIOB4IBCEQTCQKRMFYYDENBWHA5DYPSBF5K";
    const ACCOUNT: &str = "GB43KVROR7TFJ6KAPCYRF2FJROTZAH4FHLTJLPWX4DRZCC5NASLGITR6";
    // Testnet hash of a signed V1 transaction from the test account.
    const TX_HASH: &str = "b49730ddf9bd86647836fc66eb4dd08317c44220c7c299ff02d76f76e92229d3";
    const TX_SIGNATURE: &str = "423f84319babc264c4be15ef5dc1b509f633f1cf3d9d4b6b10ca9efe068f5f67\
                                b2dd4f5a14c628d051d7fa4764b8d58ad73b7429d04531cd1ba4cd8b1308bd06";

    fn test_keypair() -> Keypair {
        Keypair::from_seed(&core::array::from_fn(|i| i as u8 + 1))
    }

    #[test]
    fn test_seed_and_account() {
        let keypair = test_keypair();
        assert_eq!(keypair.account_id(), ACCOUNT);
        assert_eq!(keypair.secret_seed().as_deref(), Some(SEED));
        assert_eq!(
            Keypair::from_secret_seed(SEED).unwrap().account_id(),
            ACCOUNT
        );
        assert_eq!(keypair.signature_hint().to_string(), "ad049664");
    }

    #[test]
    fn test_deterministic_signature() {
        let message = hex::decode(TX_HASH).unwrap();
        let signature = test_keypair().sign(&message).unwrap();
        assert_eq!(hex::encode(signature), TX_SIGNATURE);
        assert!(verify(&test_keypair().public_key(), &message, &signature));
    }

    #[test]
    fn test_public_only() {
        let keypair = Keypair::from_account_id(ACCOUNT).unwrap();
        assert!(!keypair.can_sign());
        assert_eq!(keypair.secret_seed(), None);
        assert_eq!(keypair.sign(b"hi"), Err(SignerError::MissingPrivateKey));

        let message = hex::decode(TX_HASH).unwrap();
        let signature = hex::decode(TX_SIGNATURE).unwrap();
        assert!(keypair.verify(&message, &signature));
    }

    #[test_case(b"other message"; "wrong message")]
    #[test_case(b""; "empty message")]
    fn test_verify_rejects(message: &[u8]) {
        let signature = hex::decode(TX_SIGNATURE).unwrap();
        assert!(!test_keypair().verify(message, &signature));
    }

    #[test]
    fn test_verify_rejects_malformed_signature() {
        assert!(!test_keypair().verify(b"m", &[0; 63]));
    }

    #[test]
    fn test_decorated_signature() {
        let keypair = Keypair::random();
        let decorated = keypair.try_sign_decorated(b"payload").unwrap();
        assert_eq!(decorated.hint, keypair.signature_hint());
        assert_eq!(decorated.signature.len(), 64);
        assert!(keypair.verify_decorated(b"payload", &decorated));
        assert!(!test_keypair().verify_decorated(b"payload", &decorated));
    }

    #[test]
    fn test_wrong_strkey_kind() {
        assert_matches!(
            Keypair::from_secret_seed(ACCOUNT),
            Err(SignerError::InvalidKey)
        );
        assert_matches!(
            Keypair::from_account_id(SEED),
            Err(SignerError::Strkey(_))
        );
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", test_keypair());
        assert!(debug.contains(ACCOUNT));
        assert!(!debug.contains(SEED));
    }
}
