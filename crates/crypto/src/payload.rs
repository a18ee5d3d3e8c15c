use crate::CryptoHash;

/// Data that is hashed before being signed
pub trait Payload {
    fn hash(&self) -> CryptoHash;
}

/// [`Payload`] bundled together with its signature
pub trait SignedPayload: Payload {
    type PublicKey;

    /// Returns the public key of the signer, or `None` if the
    /// signature doesn't match the payload.
    fn verify(&self) -> Option<Self::PublicKey>;
}

impl<T> Payload for &T
where
    T: Payload + ?Sized,
{
    #[inline]
    fn hash(&self) -> CryptoHash {
        (**self).hash()
    }
}

impl<T> SignedPayload for &T
where
    T: SignedPayload + ?Sized,
{
    type PublicKey = T::PublicKey;

    #[inline]
    fn verify(&self) -> Option<Self::PublicKey> {
        (**self).verify()
    }
}
