use msgsig_crypto::{Curve, Secp256k1, SignedPayload};
use msgsig_erc191::{Erc191Payload, SignedErc191Payload};

/// Signing scheme declared by the `version` field of a payload
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
pub enum Version {
    /// [ERC-191](https://github.com/ethereum/ercs/blob/master/ERCS/erc-191.md)
    /// personal message, i.e. what `personal_sign` produces
    #[strum(serialize = "2")]
    PersonalSign,
}

impl Version {
    /// Recovers the public key that signed `msg` under this scheme
    pub fn recover(
        self,
        msg: &str,
        signature: <Secp256k1 as Curve>::Signature,
    ) -> Option<<Secp256k1 as Curve>::PublicKey> {
        match self {
            Self::PersonalSign => SignedErc191Payload {
                payload: Erc191Payload(msg.to_string()),
                signature,
            }
            .verify(),
        }
    }
}
