use impl_tools::autoimpl;
use msgsig_crypto::{CryptoHash, Curve, Payload, Secp256k1, SignedPayload, keccak256};

/// Ethereum clients add this to the recovery byte of
/// personal message signatures
pub const RECOVERY_BYTE_OFFSET: u8 = 27;

/// See [ERC-191](https://github.com/ethereum/ercs/blob/master/ERCS/erc-191.md)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc191Payload(pub String);

impl Erc191Payload {
    #[inline]
    pub fn prehash(&self) -> Vec<u8> {
        let data = self.0.as_bytes();
        [
            format!("\x19Ethereum Signed Message:\n{}", data.len()).as_bytes(),
            data,
        ]
        .concat()
    }
}

impl Payload for Erc191Payload {
    #[inline]
    fn hash(&self) -> CryptoHash {
        keccak256(self.prehash())
    }
}

#[autoimpl(Deref using self.payload)]
#[derive(Debug, Clone)]
pub struct SignedErc191Payload {
    pub payload: Erc191Payload,

    /// There is no public key member because the public key can be recovered
    /// via `ecrecover()` knowing the data and the signature
    pub signature: <Secp256k1 as Curve>::Signature,
}

impl Payload for SignedErc191Payload {
    #[inline]
    fn hash(&self) -> CryptoHash {
        self.payload.hash()
    }
}

impl SignedPayload for SignedErc191Payload {
    type PublicKey = <Secp256k1 as Curve>::PublicKey;

    #[inline]
    fn verify(&self) -> Option<Self::PublicKey> {
        // normalize v field of the signature.
        let signature_v_corrected = if *self.signature.last()? >= RECOVERY_BYTE_OFFSET {
            let mut sig = self.signature;
            // Ethereum only uses uncompressed keys, with corresponding value v=27/28
            // https://bitcoin.stackexchange.com/a/38909/58790
            *sig.last_mut()? -= RECOVERY_BYTE_OFFSET;
            sig
        } else {
            self.signature
        };
        Secp256k1::verify(&signature_v_corrected, &self.payload.hash(), &())
    }
}

#[cfg(feature = "signing")]
impl SignedErc191Payload {
    /// Signs the payload the way `personal_sign` does, i.e. with v ∈ {27, 28}
    pub fn sign(
        payload: Erc191Payload,
        key: &msgsig_crypto::Secp256k1SigningKey,
    ) -> Result<Self, msgsig_crypto::SigningError> {
        let mut signature = key.sign_prehash(&payload.hash())?;
        signature[64] += RECOVERY_BYTE_OFFSET;
        Ok(Self { payload, signature })
    }
}
