use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{VerificationError, VerifiedIdentity, Version};

/// Signed message as exchanged in JSON, e.g.
/// `{"address":"0x...","msg":"...","sig":"0x...","version":"2"}`.
///
/// All fields are untrusted. They are only interpreted by [`crate::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignedMessagePayload {
    /// Claimed signer, expected to be EIP-55 checksummed
    pub address: String,
    pub msg: String,
    /// Hex-encoded `r || s || v`
    pub sig: String,
    pub version: String,
}

impl SignedMessagePayload {
    /// Decodes a JSON object with exactly the four payload fields
    pub fn from_json(raw: &str) -> Result<Self, VerificationError> {
        // objects only: derived `Deserialize` would also accept a 4-element array
        let object: Map<String, Value> = serde_json::from_str(raw)?;
        serde_json::from_value(object.into()).map_err(Into::into)
    }

    /// Pretty-printed with two-space indentation
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[inline]
    pub fn verify(&self) -> Result<VerifiedIdentity, VerificationError> {
        crate::verify(self)
    }

    /// Shape hint shown to users before they paste anything
    pub fn example() -> Self {
        Self {
            address: "0x7cB57B5A97eAbe94205C07890BE4c1aD31E486A8".to_string(),
            msg: "asdfasdfasdf".to_string(),
            sig: "0x4771d78f13ba...".to_string(),
            version: Version::PersonalSign.to_string(),
        }
    }
}
