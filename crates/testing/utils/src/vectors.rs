//! Personal message signatures by [`crate::keys::REFERENCE_SECRET`], `v ∈ {27, 28}`

use hex_literal::hex;

/// Address shown in the payload placeholder. Its private key is unknown.
pub const EXAMPLE_ADDRESS: &str = "0x7cB57B5A97eAbe94205C07890BE4c1aD31E486A8";

pub const HELLO_WORLD_MSG: &str = "Hello world!";
/// Constructed in Metamask
pub const HELLO_WORLD_SIG: [u8; 65] = hex!(
    "7800a70d05cde2c49ed546a6ce887ce6027c2c268c0285f6efef0cdfc4366b23643790f67a86468ee8301ed12cfffcb07c6530f90a9327ec057800fabd332e471c"
);

pub const ASDF_MSG: &str = "asdfasdfasdf";
pub const ASDF_SIG: [u8; 65] = hex!(
    "908cbf2ed6b7321db23742e45f7dddba5993bcb19f9876d944bf50a4c2fdcb53652bf4d7b70207568cbd15a379b95423055aa6bee87efd5f4ee86b5e82e10d3f1b"
);

pub const EMPTY_MSG: &str = "";
pub const EMPTY_SIG: [u8; 65] = hex!(
    "1f7b49a4ca68c6ec3ba5cc7a21e567bc9a9980952dde606f03e2433be0a1c9a165f629d74bd92858db688809ceaf2a1fc0183e52658b409b9910991de69de6491b"
);

/// `0x`-prefixed lowercase hex, the way signatures travel in payloads
pub fn to_prefixed_hex(signature: &[u8]) -> String {
    format!("0x{}", hex::encode(signature))
}
