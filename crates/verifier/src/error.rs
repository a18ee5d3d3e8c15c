use msgsig_address::{Address, ParseAddressError};
use msgsig_crypto::ParseHexError;
use serde_json::error::Category;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VerificationError {
    /// Input is not well-formed JSON
    #[error("decode: {0}")]
    Decode(#[source] serde_json::Error),
    /// JSON is well-formed, but doesn't have the shape of a payload
    #[error("schema: {0}")]
    Schema(#[source] serde_json::Error),
    #[error("verification failed: {0}")]
    Mismatch(#[from] MismatchReason),
}

impl VerificationError {
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode(_) => ErrorKind::Decode,
            Self::Schema(_) => ErrorKind::Schema,
            Self::Mismatch(_) => ErrorKind::Mismatch,
        }
    }
}

impl From<serde_json::Error> for VerificationError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Schema(err),
            Category::Syntax | Category::Eof | Category::Io => Self::Decode(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Decode,
    Schema,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum MismatchReason {
    #[error("unsupported version: {0:?}")]
    UnsupportedVersion(String),
    #[error("malformed signature: {0}")]
    MalformedSignature(#[from] SignatureError),
    #[error("invalid {0}")]
    InvalidAddress(#[from] ParseAddressError),
    #[error("signature is not recoverable")]
    Unrecoverable,
    #[error("signed by {recovered}, not by {claimed}")]
    AddressMismatch { claimed: Address, recovered: Address },
}

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum SignatureError {
    #[error(transparent)]
    Hex(#[from] ParseHexError),
    #[error("invalid recovery byte: {0}")]
    RecoveryByte(u8),
}
