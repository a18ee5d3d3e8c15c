use msgsig_address::Address;
use msgsig_crypto::{Secp256k1SigningKey, SigningError};
use msgsig_erc191::{Erc191Payload, SignedErc191Payload};

use crate::{SignedMessagePayload, Version};

/// Produces a version `"2"` payload for `msg`, with a checksummed address
/// and a `0x`-prefixed lowercase hex signature
pub fn sign_message(
    key: &Secp256k1SigningKey,
    msg: impl Into<String>,
) -> Result<SignedMessagePayload, SigningError> {
    let address = Address::from_public_key(&key.public_key()?);
    let SignedErc191Payload {
        payload: Erc191Payload(msg),
        signature,
    } = SignedErc191Payload::sign(Erc191Payload(msg.into()), key)?;

    Ok(SignedMessagePayload {
        address: address.to_string(),
        msg,
        sig: format!("0x{}", hex::encode(signature)),
        version: Version::PersonalSign.to_string(),
    })
}
