//! ecsig-crypto: ECDSA over P-256.
//! - keygen from an injectable entropy source, secret zeroed on drop
//! - SHA-256 (or BLAKE3) message digests
//! - RFC 6979 nonces, hedged with fresh entropy by default
//! - boolean verification, never an error for a bad signature

pub mod digest;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod keys;
pub mod signature;
pub mod signer;
pub mod verifier;
pub mod workflow;

#[cfg(test)]
mod fixtures;

pub use digest::{hash_message, hash_with, Digest, HashAlgorithm, DIGEST_LEN};
pub use engine::{P256Engine, SignEngine, ENGINE};
pub use entropy::{EntropySource, OsEntropy, SeededEntropy};
pub use error::{CryptoError, Result};
pub use keys::{Curve, KeyPair, PublicKey, SCALAR_LEN};
pub use signature::{Signature, SIGNATURE_LEN};
pub use signer::{sign_digest, sign_prehash, NonceMode};
pub use verifier::{verify_digest, verify_encoded};
pub use workflow::{run_workflow, Transcript};
