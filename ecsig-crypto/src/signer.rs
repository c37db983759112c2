use std::fmt;
use std::str::FromStr;

use p256::ecdsa::signature::hazmat::{PrehashSigner, RandomizedPrehashSigner};
use p256::ecdsa::{Error as EcdsaError, Signature as EcdsaSignature};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::digest::{Digest, DIGEST_LEN};
use crate::entropy::{AddedEntropy, EntropySource};
use crate::error::{CryptoError, Result};
use crate::keys::KeyPair;
use crate::signature::Signature;

/// How the per-signature nonce is derived. Both modes follow RFC 6979, so
/// the nonce is bound to the key and the digest and never repeats across
/// messages even if the entropy source misbehaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonceMode {
    /// RFC 6979 with 32 bytes of fresh entropy mixed in.
    #[default]
    Hedged,
    /// Plain RFC 6979. Same key and digest always give the same signature.
    Deterministic,
}

impl NonceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NonceMode::Hedged => "hedged",
            NonceMode::Deterministic => "deterministic",
        }
    }
}

impl fmt::Display for NonceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NonceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hedged" => Ok(NonceMode::Hedged),
            "deterministic" | "rfc6979" => Ok(NonceMode::Deterministic),
            other => Err(format!("unknown nonce mode: {other}")),
        }
    }
}

pub fn sign_digest(
    key: &KeyPair,
    digest: &Digest,
    entropy: &mut dyn EntropySource,
    mode: NonceMode,
) -> Result<Signature> {
    sign_prehash(key, digest.as_ref(), entropy, mode)
}

/// Signs a caller-supplied prehash. It must be exactly one P-256 scalar
/// wide; the entropy source is only touched in hedged mode.
pub fn sign_prehash(
    key: &KeyPair,
    prehash: &[u8],
    entropy: &mut dyn EntropySource,
    mode: NonceMode,
) -> Result<Signature> {
    if prehash.len() != DIGEST_LEN {
        return Err(CryptoError::Signing(format!(
            "{} prehash must be {DIGEST_LEN} bytes, got {}",
            key.curve().name(),
            prehash.len()
        )));
    }

    let signing_key = key.signing_key();
    let signed: std::result::Result<EcdsaSignature, EcdsaError> = match mode {
        NonceMode::Deterministic => signing_key.sign_prehash(prehash),
        NonceMode::Hedged => {
            let mut added = AddedEntropy::draw(entropy)?;
            signing_key.sign_prehash_with_rng(&mut added, prehash)
        }
    };
    let signature = Signature::from(signed.map_err(|e| CryptoError::Signing(e.to_string()))?);

    debug!(mode = %mode, public_key = %key.public_key(), "signed digest");
    Ok(signature)
}
