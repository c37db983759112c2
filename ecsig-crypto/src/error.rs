use thiserror::Error;

/// Errors raised by key generation, hashing, signing and decoding.
///
/// Verification never produces one of these for a bad signature; it answers
/// `false` instead.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("entropy source unavailable: {0}")]
    RandomSource(String),

    #[error("malformed hex input: {0}")]
    Encoding(#[from] hex::FromHexError),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature encoding: {0}")]
    InvalidSignature(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
