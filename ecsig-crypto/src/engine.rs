use crate::digest::{hash_with, Digest, HashAlgorithm};
use crate::entropy::EntropySource;
use crate::error::Result;
use crate::keys::{Curve, KeyPair, PublicKey};
use crate::signature::Signature;
use crate::signer::{sign_digest, NonceMode};
use crate::verifier::verify_digest;

/// The keygen / hash / sign / verify boundary the CLI talks to.
pub trait SignEngine: Send + Sync + 'static {
    fn curve(&self) -> Curve;

    /// Generate a fresh key pair from `entropy`.
    fn generate_keys(&self, entropy: &mut dyn EntropySource) -> Result<KeyPair>;

    /// Hash a message into the digest that gets signed.
    fn digest(&self, message: &[u8]) -> Digest;

    /// Sign a digest. The entropy source may be ignored by deterministic engines.
    fn sign(
        &self,
        key: &KeyPair,
        digest: &Digest,
        entropy: &mut dyn EntropySource,
    ) -> Result<Signature>;

    /// Check a signature. Never fails, only answers.
    fn verify(&self, public_key: &PublicKey, digest: &Digest, signature: &Signature) -> bool;
}

/// ECDSA over P-256 with a configurable prehash and nonce mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct P256Engine {
    pub hash: HashAlgorithm,
    pub nonce_mode: NonceMode,
}

impl P256Engine {
    pub const fn new(hash: HashAlgorithm, nonce_mode: NonceMode) -> Self {
        Self { hash, nonce_mode }
    }
}

impl Default for P256Engine {
    fn default() -> Self {
        ENGINE
    }
}

impl SignEngine for P256Engine {
    fn curve(&self) -> Curve {
        Curve::P256
    }

    fn generate_keys(&self, entropy: &mut dyn EntropySource) -> Result<KeyPair> {
        KeyPair::generate(self.curve(), entropy)
    }

    fn digest(&self, message: &[u8]) -> Digest {
        hash_with(self.hash, message)
    }

    fn sign(
        &self,
        key: &KeyPair,
        digest: &Digest,
        entropy: &mut dyn EntropySource,
    ) -> Result<Signature> {
        sign_digest(key, digest, entropy, self.nonce_mode)
    }

    fn verify(&self, public_key: &PublicKey, digest: &Digest, signature: &Signature) -> bool {
        verify_digest(public_key, digest, signature)
    }
}

/// Default engine: SHA-256 prehash, hedged RFC 6979 nonces.
pub static ENGINE: P256Engine = P256Engine::new(HashAlgorithm::Sha256, NonceMode::Hedged);
