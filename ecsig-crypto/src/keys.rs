use std::fmt;

use p256::ecdsa::{SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use tracing::debug;
use zeroize::Zeroizing;

use crate::entropy::EntropySource;
use crate::error::{CryptoError, Result};

/// Scalar (and field element) length for P-256.
pub const SCALAR_LEN: usize = 32;

/// Upper bound on rejection-sampling draws during key generation. A P-256
/// candidate is out of range with probability about 2^-32, so exhausting
/// this means the source is broken.
const MAX_KEYGEN_DRAWS: usize = 64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    #[default]
    P256,
}

impl Curve {
    pub fn name(&self) -> &'static str {
        match self {
            Curve::P256 => "P-256",
        }
    }

    pub fn scalar_len(&self) -> usize {
        match self {
            Curve::P256 => SCALAR_LEN,
        }
    }

    /// Length of the fixed-width r || s signature encoding.
    pub fn signature_len(&self) -> usize {
        2 * self.scalar_len()
    }
}

/// Public half of a key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parses a SEC1 point, compressed or uncompressed.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_sec1_bytes(&hex::decode(s.trim())?)
    }

    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        self.inner.to_encoded_point(compress).as_bytes().to_vec()
    }

    /// Compressed SEC1 hex, the form printed by the CLI.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_sec1_bytes(true))
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// P-256 key pair. The secret scalar is zeroed when the pair is dropped and
/// is never rendered by `Debug`.
#[derive(Clone)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Draws a private scalar from `entropy` by rejection sampling and
    /// derives the public point.
    pub fn generate(curve: Curve, entropy: &mut dyn EntropySource) -> Result<Self> {
        let mut candidate = Zeroizing::new([0u8; SCALAR_LEN]);
        for _ in 0..MAX_KEYGEN_DRAWS {
            entropy.fill(&mut candidate[..])?;
            // Rejects zero and values >= n.
            if let Ok(secret) = SecretKey::from_slice(&candidate[..]) {
                let pair = Self::from_secret(secret);
                debug!(curve = curve.name(), public_key = %pair.public, "generated key pair");
                return Ok(pair);
            }
        }
        Err(CryptoError::RandomSource(format!(
            "no valid {} scalar after {MAX_KEYGEN_DRAWS} draws",
            curve.name()
        )))
    }

    /// Builds a pair from a raw 32-byte big-endian scalar.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SCALAR_LEN {
            return Err(CryptoError::InvalidPrivateKey(format!(
                "expected {SCALAR_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let secret = SecretKey::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self::from_secret(secret))
    }

    /// Parses a SEC1 `ECPrivateKey` DER structure.
    pub fn from_sec1_der(der: &[u8]) -> Result<Self> {
        let secret = SecretKey::from_sec1_der(der)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self::from_secret(secret))
    }

    /// Exports the pair as SEC1 DER. The returned buffer is zeroed on drop;
    /// keep it off logs and consoles.
    pub fn to_sec1_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        self.secret
            .to_sec1_der()
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn curve(&self) -> Curve {
        Curve::P256
    }

    pub(crate) fn signing_key(&self) -> SigningKey {
        SigningKey::from(&self.secret)
    }

    fn from_secret(secret: SecretKey) -> Self {
        let public = PublicKey {
            inner: VerifyingKey::from(secret.public_key()),
        };
        Self { secret, public }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &Curve::P256.name())
            .field("public", &self.public)
            .field("secret", &"<redacted>")
            .finish()
    }
}
