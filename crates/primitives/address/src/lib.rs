//! 20-byte account identifiers and their [EIP-55](https://eips.ethereum.org/EIPS/eip-55)
//! mixed-case checksum encoding.

use core::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use msgsig_crypto::{
    Curve, ParseHexError, Secp256k1, checked_hex_decode_array, keccak256, strip_hex_prefix,
};
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ParseAddressError {
    #[error("address: {0}")]
    Hex(#[from] ParseHexError),
}

#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const LEN: usize = 20;

    /// See <https://ethereum.org/en/developers/docs/accounts/#account-creation>
    #[inline]
    pub fn from_public_key(public_key: &<Secp256k1 as Curve>::PublicKey) -> Self {
        let hash = keccak256(public_key);
        let mut address = [0u8; Self::LEN];
        address.copy_from_slice(&hash[hash.len() - Self::LEN..]);
        Self(address)
    }

    /// `0x`-prefixed EIP-55 encoding
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(2 + lower.len());
        out.push_str("0x");
        out.extend(lower.chars().enumerate().map(|(i, c)| {
            if c.is_ascii_alphabetic() && nibble(&hash, i) >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        }));
        out
    }

    /// Whether `s` either carries no checksum (single-case hex) or carries
    /// a correct one. Malformed input is never valid.
    pub fn has_valid_checksum(s: &str) -> bool {
        let Ok(address) = s.parse::<Self>() else {
            return false;
        };
        let digits = strip_hex_prefix(s);
        let single_case = !digits.chars().any(|c| c.is_ascii_lowercase())
            || !digits.chars().any(|c| c.is_ascii_uppercase());

        single_case || address.to_checksum()[2..] == *digits
    }
}

#[inline]
fn nibble(hash: &[u8], i: usize) -> u8 {
    let byte = hash[i / 2];
    if i % 2 == 0 { byte >> 4 } else { byte & 0x0f }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    #[inline]
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

/// Case-insensitive: the checksum is not enforced here,
/// see [`Address::has_valid_checksum`]
impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        checked_hex_decode_array(s).map(Self).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")]
    #[case("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359")]
    #[case("0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB")]
    #[case("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb")]
    #[case("0x52908400098527886E0F7030069857D2E4169EE7")]
    #[case("0x8617E340B3D01FA5F11F306F4090FD50E238070D")]
    #[case("0xde709f2102306220921060314715629080e2fb77")]
    #[case("0x27b1fdb04752bbc536007a920d24acb045561c26")]
    #[case("0x7cB57B5A97eAbe94205C07890BE4c1aD31E486A8")]
    fn eip55_vectors(#[case] checksummed: &str) {
        let address: Address = checksummed.to_lowercase().parse().unwrap();
        assert_eq!(address.to_string(), checksummed);
        assert!(Address::has_valid_checksum(checksummed));
    }

    #[rstest]
    #[case("0x7cb57b5a97eabe94205c07890be4c1ad31e486a8")]
    #[case("0x7CB57B5A97EABE94205C07890BE4C1AD31E486A8")]
    #[case("7cB57B5A97eAbe94205C07890BE4c1aD31E486A8")]
    #[case("0X7cB57B5A97eAbe94205C07890BE4c1aD31E486A8")]
    fn parsing_is_case_insensitive(#[case] s: &str) {
        assert_eq!(
            s.parse::<Address>().unwrap(),
            Address(hex!("7cb57b5a97eabe94205c07890be4c1ad31e486a8"))
        );
    }

    #[test]
    fn detects_broken_checksum() {
        // last letter case flipped
        assert!(!Address::has_valid_checksum(
            "0x7cB57B5A97eAbe94205C07890BE4c1aD31E486a8"
        ));
    }

    #[rstest]
    #[case("")]
    #[case("0x")]
    #[case("0x7cB57B5A97eAbe94205C07890BE4c1aD31E486")]
    #[case("0x7cB57B5A97eAbe94205C07890BE4c1aD31E486A8A8")]
    #[case("0xzzB57B5A97eAbe94205C07890BE4c1aD31E486A8")]
    fn rejects_malformed(#[case] s: &str) {
        assert!(s.parse::<Address>().is_err());
        assert!(!Address::has_valid_checksum(s));
    }

    #[test]
    fn from_public_key() {
        let public_key = hex!(
            "85a66984273f338ce4ef7b85e5430b008307e8591bb7c1b980852cf6423770b801f41e9438155eb53a5e20f748640093bb42ae3aeca035f7b7fd7a1a21f22f68"
        );
        assert_eq!(
            Address::from_public_key(&public_key).to_string(),
            "0x0551F7c9a91eE579C9e40444ffC490001C323108"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_checksum() {
        let address = Address(hex!("7cb57b5a97eabe94205c07890be4c1ad31e486a8"));
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, r#""0x7cB57B5A97eAbe94205C07890BE4c1aD31E486A8""#);
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);
    }
}
