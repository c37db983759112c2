use p256::ecdsa::signature::hazmat::PrehashVerifier;

use crate::digest::Digest;
use crate::keys::PublicKey;
use crate::signature::Signature;

/// `true` iff `signature` is valid for `digest` under `public_key`.
///
/// Invalid signatures are an answer, not an error. Scalar and point
/// arithmetic underneath is constant-time.
pub fn verify_digest(public_key: &PublicKey, digest: &Digest, signature: &Signature) -> bool {
    public_key
        .verifying_key()
        .verify_prehash(digest.as_ref(), signature.ecdsa())
        .is_ok()
}

/// Same as [`verify_digest`] on raw encodings: SEC1 public key, 32-byte
/// digest, 64-byte `r || s`. Anything malformed verifies as `false`.
pub fn verify_encoded(public_key: &[u8], digest: &[u8], signature: &[u8]) -> bool {
    let (Ok(public_key), Ok(digest), Ok(signature)) = (
        PublicKey::from_sec1_bytes(public_key),
        Digest::from_slice(digest),
        Signature::from_bytes(signature),
    ) else {
        return false;
    };
    verify_digest(&public_key, &digest, &signature)
}
