use std::fmt;

use p256::ecdsa::Signature as EcdsaSignature;

use crate::error::{CryptoError, Result};
use crate::keys::SCALAR_LEN;

/// Length of the fixed-width `r || s` encoding.
pub const SIGNATURE_LEN: usize = 2 * SCALAR_LEN;

/// ECDSA signature `(r, s)`, both non-zero scalars mod n.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    inner: EcdsaSignature,
}

impl Signature {
    /// Parses `r || s`, 32 big-endian bytes each. Rejects zero or
    /// out-of-range components.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(CryptoError::InvalidSignature(format!(
                "expected {SIGNATURE_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let inner = EcdsaSignature::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(s.trim())?)
    }

    /// ASN.1 DER `SEQUENCE { r INTEGER, s INTEGER }`.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = EcdsaSignature::from_der(der)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    pub fn to_der(&self) -> Vec<u8> {
        self.inner.to_der().as_bytes().to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn r(&self) -> [u8; SCALAR_LEN] {
        let mut out = [0u8; SCALAR_LEN];
        out.copy_from_slice(&self.to_bytes()[..SCALAR_LEN]);
        out
    }

    pub fn s(&self) -> [u8; SCALAR_LEN] {
        let mut out = [0u8; SCALAR_LEN];
        out.copy_from_slice(&self.to_bytes()[SCALAR_LEN..]);
        out
    }

    pub(crate) fn ecdsa(&self) -> &EcdsaSignature {
        &self.inner
    }
}

impl From<EcdsaSignature> for Signature {
    fn from(inner: EcdsaSignature) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
