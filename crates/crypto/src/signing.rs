use core::fmt::{self, Debug};

use k256::ecdsa::SigningKey;
use thiserror::Error as ThisError;
use zeroize::Zeroize;

use crate::{
    CryptoHash, Curve, ParseHexError, Secp256k1, checked_hex_decode_array,
    curve::untagged_public_key,
};

#[derive(Debug, ThisError)]
pub enum SigningError {
    #[error("secret key: {0}")]
    Parse(#[from] ParseHexError),
    #[error("ecdsa: {0}")]
    Ecdsa(#[from] k256::ecdsa::Error),
    #[error("public key is not encodable")]
    PublicKey,
}

/// Secret secp256k1 key, zeroized on drop
pub struct Secp256k1SigningKey(SigningKey);

impl Secp256k1SigningKey {
    pub fn from_bytes(secret: &[u8; 32]) -> Result<Self, SigningError> {
        SigningKey::from_slice(secret)
            .map(Self)
            .map_err(Into::into)
    }

    /// Parses optionally `0x`-prefixed hex of a 32-byte secret
    pub fn from_hex(secret: impl AsRef<str>) -> Result<Self, SigningError> {
        let mut bytes = checked_hex_decode_array::<32>(secret.as_ref().trim())?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    pub fn public_key(&self) -> Result<<Secp256k1 as Curve>::PublicKey, SigningError> {
        untagged_public_key(self.0.verifying_key()).ok_or(SigningError::PublicKey)
    }

    /// Deterministic ([RFC 6979](https://www.rfc-editor.org/rfc/rfc6979)) low-`s`
    /// signature over a prehashed message, with `v ∈ {0, 1}`
    pub fn sign_prehash(
        &self,
        hash: &CryptoHash,
    ) -> Result<<Secp256k1 as Curve>::Signature, SigningError> {
        let (signature, recovery_id) = self.0.sign_prehash_recoverable(hash)?;

        let mut out = [0u8; 65];
        let (rs, v) = out.split_at_mut(64);
        rs.copy_from_slice(&signature.to_bytes());
        v[0] = recovery_id.to_byte();
        Ok(out)
    }
}

impl Debug for Secp256k1SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1SigningKey")
            .field("public_key", &self.public_key().map(hex::encode).ok())
            .finish_non_exhaustive()
    }
}
