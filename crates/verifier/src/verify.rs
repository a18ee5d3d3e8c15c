use msgsig_address::Address;
use msgsig_crypto::{Curve, Secp256k1, checked_hex_decode_array};
use msgsig_erc191::RECOVERY_BYTE_OFFSET;
use serde::Serialize;

use crate::{MismatchReason, SignatureError, SignedMessagePayload, VerificationError, Version};

/// Outcome of a successful verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedIdentity {
    /// Exactly as claimed in the payload
    pub address: String,
    pub msg: String,
    /// Recovered from the signature
    pub signer: Address,
}

/// Recovers the signer of `payload` and checks it against the claimed
/// address. The comparison is case-insensitive.
///
/// Pure: no I/O and no state, so the same payload always yields the same
/// result.
pub fn verify(payload: &SignedMessagePayload) -> Result<VerifiedIdentity, VerificationError> {
    // fail closed on anything but the known schemes
    let version: Version = payload
        .version
        .parse()
        .map_err(|_| MismatchReason::UnsupportedVersion(payload.version.clone()))?;

    let signature = decode_signature(&payload.sig).map_err(MismatchReason::from)?;

    let claimed: Address = payload.address.parse().map_err(MismatchReason::from)?;
    if !Address::has_valid_checksum(&payload.address) {
        tracing::warn!(
            address = %payload.address,
            expected = %claimed,
            "address checksum mismatch"
        );
    }

    let recovered = version
        .recover(&payload.msg, signature)
        .map(|public_key| Address::from_public_key(&public_key))
        .ok_or(MismatchReason::Unrecoverable)?;

    if recovered != claimed {
        return Err(MismatchReason::AddressMismatch { claimed, recovered }.into());
    }

    Ok(VerifiedIdentity {
        address: payload.address.clone(),
        msg: payload.msg.clone(),
        signer: recovered,
    })
}

/// Decodes `r || s || v` with `v ∈ {0, 1, 27, 28}`
fn decode_signature(sig: &str) -> Result<<Secp256k1 as Curve>::Signature, SignatureError> {
    let signature: <Secp256k1 as Curve>::Signature = checked_hex_decode_array(sig)?;
    let v = signature[64];
    let unshifted = v.checked_sub(RECOVERY_BYTE_OFFSET).unwrap_or(v);
    if unshifted > 1 {
        return Err(SignatureError::RecoveryByte(v));
    }
    Ok(signature)
}
