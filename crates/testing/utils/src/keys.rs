use msgsig_address::Address;
use msgsig_crypto::{Secp256k1SigningKey, keccak256};
use rstest::fixture;

/// Private key the Metamask reference signatures were produced with
pub const REFERENCE_SECRET: [u8; 32] =
    hex_literal::hex!("a4b319a82adfc43584e4537fec97a80516e16673db382cd91eba97abbab8ca56");

pub const REFERENCE_ADDRESS: &str = "0x0551F7c9a91eE579C9e40444ffC490001C323108";

#[fixture]
pub fn reference() -> Secp256k1SigningKey {
    Secp256k1SigningKey::from_bytes(&REFERENCE_SECRET).unwrap()
}

/// Deterministic key derived from `seed`
pub fn from_seed(seed: &str) -> Secp256k1SigningKey {
    Secp256k1SigningKey::from_bytes(&keccak256(seed)).unwrap()
}

#[fixture]
pub fn alice() -> Secp256k1SigningKey {
    from_seed("alice")
}

#[fixture]
pub fn bob() -> Secp256k1SigningKey {
    from_seed("bob")
}

pub fn address_of(key: &Secp256k1SigningKey) -> Address {
    Address::from_public_key(&key.public_key().unwrap())
}
