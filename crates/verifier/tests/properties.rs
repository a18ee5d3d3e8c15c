use std::thread;

use msgsig_crypto::Secp256k1SigningKey;
use msgsig_test_utils::{
    keys::{self, REFERENCE_ADDRESS, alice, bob},
    tamper::{flip_bit, tamper_string},
    vectors::{self, EXAMPLE_ADDRESS, to_prefixed_hex},
};
use msgsig_verifier::{
    ErrorKind, MismatchReason, SignedMessagePayload, VerificationError, check, sign_message,
    verify,
};
use proptest::prelude::*;
use rstest::rstest;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn reference_payload() -> SignedMessagePayload {
    SignedMessagePayload {
        address: REFERENCE_ADDRESS.to_string(),
        msg: vectors::ASDF_MSG.to_string(),
        sig: to_prefixed_hex(&vectors::ASDF_SIG),
        version: "2".to_string(),
    }
}

#[test]
fn reference_payload_round_trips_through_json() {
    init_logging();

    let raw = r#"{"address":"0x0551F7c9a91eE579C9e40444ffC490001C323108","msg":"asdfasdfasdf","sig":"0x908cbf2ed6b7321db23742e45f7dddba5993bcb19f9876d944bf50a4c2fdcb53652bf4d7b70207568cbd15a379b95423055aa6bee87efd5f4ee86b5e82e10d3f1b","version":"2"}"#;
    let identity = check(raw).unwrap();

    assert_eq!(identity.address, REFERENCE_ADDRESS);
    assert_eq!(identity.msg, "asdfasdfasdf");
}

#[test]
fn example_payload_with_zero_signature_fails() {
    init_logging();

    let raw = format!(
        r#"{{"address":"{EXAMPLE_ADDRESS}","msg":"asdfasdfasdf","sig":"0x{}","version":"2"}}"#,
        "0".repeat(130)
    );
    assert!(matches!(
        check(&raw),
        Err(VerificationError::Mismatch(MismatchReason::Unrecoverable))
    ));
}

#[test]
fn placeholder_is_not_verifiable() {
    let example = SignedMessagePayload::example();
    assert!(matches!(
        verify(&example),
        Err(VerificationError::Mismatch(
            MismatchReason::MalformedSignature(_)
        ))
    ));
}

#[rstest]
fn swapped_address_fails(alice: Secp256k1SigningKey, bob: Secp256k1SigningKey) {
    init_logging();

    let mut payload = sign_message(&alice, "transfer ownership").unwrap();
    payload.address = keys::address_of(&bob).to_string();

    match verify(&payload) {
        Err(VerificationError::Mismatch(MismatchReason::AddressMismatch { claimed, recovered })) => {
            assert_eq!(claimed, keys::address_of(&bob));
            assert_eq!(recovered, keys::address_of(&alice));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[rstest]
fn verification_is_idempotent(alice: Secp256k1SigningKey) {
    let valid = sign_message(&alice, "same input, same output").unwrap();
    assert_eq!(verify(&valid).unwrap(), verify(&valid).unwrap());

    let mut invalid = valid;
    invalid.msg.push('!');
    assert_eq!(
        verify(&invalid).unwrap_err().to_string(),
        verify(&invalid).unwrap_err().to_string()
    );
}

#[test]
fn concurrent_calls_agree() {
    let payload = reference_payload();
    let expected = verify(&payload).unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| verify(&payload))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[rstest]
#[case(r#"{"address":"#, ErrorKind::Decode)]
#[case(r#"{"address":"0x","msg":"","sig":"0x"}"#, ErrorKind::Schema)]
#[case(r#"{"address":"0x","msg":"","sig":"0x","version":"2"}"#, ErrorKind::Mismatch)]
fn failures_are_classified(#[case] raw: &str, #[case] kind: ErrorKind) {
    assert_eq!(check(raw).unwrap_err().kind(), kind);
}

proptest! {
    #[test]
    fn signed_messages_verify(msg in ".*") {
        let payload = sign_message(&keys::reference(), msg.clone()).unwrap();
        let identity = verify(&payload).unwrap();

        prop_assert_eq!(identity.address, REFERENCE_ADDRESS);
        prop_assert_eq!(identity.msg, msg);
    }

    #[test]
    fn flipped_signature_bit_never_verifies(bit in 0..65 * 8usize) {
        let mut payload = reference_payload();
        payload.sig = to_prefixed_hex(&flip_bit(&vectors::ASDF_SIG, bit));

        prop_assert!(verify(&payload).is_err());
    }

    #[test]
    fn tampered_message_never_verifies(idx in 0..vectors::ASDF_MSG.len()) {
        let mut payload = reference_payload();
        payload.msg = tamper_string(&payload.msg, idx);

        prop_assert!(verify(&payload).is_err());
    }

    #[test]
    fn truncated_json_is_decode_error(len in 0..120usize) {
        let raw = serde_json_reference();
        let truncated = &raw[..len.min(raw.len() - 1)];

        prop_assert_eq!(check(truncated).unwrap_err().kind(), ErrorKind::Decode);
    }
}

fn serde_json_reference() -> String {
    reference_payload().to_json_pretty().unwrap()
}
