use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ParseHexError {
    #[error("hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

/// Strips a leading `0x` or `0X`, if any
#[inline]
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decodes optionally `0x`-prefixed hex into array and checks for its length
pub fn checked_hex_decode_array<const N: usize>(
    input: impl AsRef<str>,
) -> Result<[u8; N], ParseHexError> {
    let bytes = hex::decode(strip_hex_prefix(input.as_ref()))?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ParseHexError::InvalidLength { expected: N, got })
}
