use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::{P256Engine, SignEngine};
use crate::entropy::EntropySource;
use crate::error::Result;

/// Public record of one keygen -> hash -> sign -> verify run. Holds no
/// private key material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub curve: String,
    pub message: String,
    pub hash: String,
    pub nonce_mode: String,
    pub public_key: String,
    pub digest: String,
    pub signature: String,
    pub verified: bool,
}

/// Runs the four steps in order and stops at the first error.
pub fn run_workflow(
    engine: &P256Engine,
    message: &str,
    entropy: &mut dyn EntropySource,
) -> Result<Transcript> {
    let key = engine.generate_keys(entropy)?;
    debug!(public_key = %key.public_key(), "step 1: key pair ready");

    let digest = engine.digest(message.as_bytes());
    debug!(digest = %digest, hash = %engine.hash, "step 2: message hashed");

    let signature = engine.sign(&key, &digest, entropy)?;
    debug!(signature = %signature, "step 3: digest signed");

    let verified = engine.verify(key.public_key(), &digest, &signature);
    info!(verified, "step 4: signature checked");

    Ok(Transcript {
        curve: engine.curve().name().to_string(),
        message: message.to_string(),
        hash: engine.hash.to_string(),
        nonce_mode: engine.nonce_mode.to_string(),
        public_key: key.public_key().to_hex(),
        digest: digest.to_hex(),
        signature: signature.to_hex(),
        verified,
    })
}
