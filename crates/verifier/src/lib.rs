//! Verification of JSON-encoded signed messages.
//!
//! A [`SignedMessagePayload`] carries the claimed `address`, the message
//! text, a hex-encoded recoverable signature and a format `version`.
//! [`verify`] recovers the signer from the signature and succeeds only if it
//! matches the claimed address. The remaining items are the caller-side
//! glue: [`check`] decodes raw text before verifying, [`submit`] reports the
//! outcome to a [`NoticeSink`], and [`normalize_pasted`] reformats pasted JSON.

mod check;
mod error;
mod notice;
mod payload;
#[cfg(feature = "signing")]
mod sign;
mod verify;
mod version;

pub use self::{
    check::{check, is_verifiable, normalize_pasted, submit},
    error::{ErrorKind, MismatchReason, SignatureError, VerificationError},
    notice::{Notice, NoticeKey, NoticeSink, Severity},
    payload::SignedMessagePayload,
    verify::{VerifiedIdentity, verify},
    version::Version,
};

#[cfg(feature = "signing")]
pub use self::sign::sign_message;

pub use msgsig_address::Address;
