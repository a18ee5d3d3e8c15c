use sha3::{Digest, Keccak256};

use crate::CryptoHash;

/// Legacy Keccak-256, as used by Ethereum (not the finalized SHA3-256)
#[inline]
pub fn keccak256(data: impl AsRef<[u8]>) -> CryptoHash {
    Keccak256::digest(data.as_ref()).into()
}
