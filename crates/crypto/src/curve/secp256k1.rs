use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::{CryptoHash, Curve};

pub struct Secp256k1;

impl Curve for Secp256k1 {
    /// Concatenated `x || y` coordinates with no leading SEC1 tag byte
    type PublicKey = [u8; 64];

    /// Concatenated `r`, `s` and `v` (recovery byte).
    ///
    /// Note: Ethereum clients shift the recovery byte and this
    /// logic might depend on chain id, so clients must rollback
    /// these changes to v ∈ {0, 1}.
    /// References:
    /// * <https://github.com/ethereumjs/ethereumjs-monorepo/blob/dc7169c16df6d36adeb6e234fcc66eb6cfc5ea3f/packages/util/src/signature.ts#L31-L62>
    /// * <https://github.com/ethereum/go-ethereum/issues/19751#issuecomment-504900739>
    type Signature = [u8; 65];

    // Output of cryptographic hash function
    type Message = CryptoHash;

    /// ECDSA signatures are recoverable, so you don't need a verifying key
    type VerifyingKey = ();

    fn verify(
        [signature @ .., v]: &Self::Signature,
        hash: &Self::Message,
        _verifying_key: &(),
    ) -> Option<Self::PublicKey> {
        // x-reduced recovery ids never appear in Ethereum signatures
        let mut recovery_id = RecoveryId::from_byte(*v).filter(|id| !id.is_x_reduced())?;

        let mut signature = Signature::from_slice(signature).ok()?;
        // (r, n - s) recovers the same key with the opposite y parity
        if let Some(normalized) = signature.normalize_s() {
            signature = normalized;
            recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), false);
        }

        let verifying_key = VerifyingKey::recover_from_prehash(hash, &signature, recovery_id).ok()?;
        untagged_public_key(&verifying_key)
    }
}

/// Strips the SEC1 tag byte off an uncompressed encoding
pub(crate) fn untagged_public_key(key: &VerifyingKey) -> Option<<Secp256k1 as Curve>::PublicKey> {
    key.to_encoded_point(false)
        .as_bytes()
        .get(1..)?
        .try_into()
        .ok()
}
