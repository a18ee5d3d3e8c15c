//! Cryptographic primitives shared by the msgsig crates.
//!
//! This crate defines lightweight traits such as [`Payload`] and
//! [`SignedPayload`] that let signing standards be treated uniformly.
//! Implementations of these traits live in companion crates like `erc191`.

mod curve;
mod hash;
mod parse;
mod payload;
#[cfg(feature = "signing")]
mod signing;

pub use self::{
    curve::*,
    hash::keccak256,
    parse::{ParseHexError, checked_hex_decode_array, strip_hex_prefix},
    payload::*,
};

#[cfg(feature = "signing")]
pub use self::signing::*;

/// Output of a 256-bit cryptographic hash function
pub type CryptoHash = [u8; 32];
