use serde_json::Value;

use crate::{Notice, NoticeSink, SignedMessagePayload, VerificationError, VerifiedIdentity};

/// Decodes raw input text and verifies it
#[inline]
pub fn check(raw: &str) -> Result<VerifiedIdentity, VerificationError> {
    SignedMessagePayload::from_json(raw)?.verify()
}

/// Whether submitting `raw` would succeed, i.e. whether the
/// recovered address equals the claimed one
#[inline]
pub fn is_verifiable(raw: &str) -> bool {
    check(raw).is_ok()
}

/// Verifies `raw` and reports the outcome to `sink` exactly once.
///
/// Returns the identity to display, or `None` if whatever is displayed
/// should be cleared.
pub fn submit(raw: &str, sink: &mut impl NoticeSink) -> Option<VerifiedIdentity> {
    let result = check(raw);
    match &result {
        Ok(identity) => {
            tracing::info!(signer = %identity.signer, "signed message verified");
        }
        Err(err) => {
            tracing::debug!(kind = %err.kind(), %err, "signed message rejected");
        }
    }
    sink.notify(Notice::from_result(&result));
    result.ok()
}

/// Re-renders pasted JSON with two-space indentation, keeping key order.
/// Returns `None` if `text` is not JSON, in which case it should be kept as is.
pub fn normalize_pasted(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
