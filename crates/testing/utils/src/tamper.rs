/// Returns a copy of `bytes` with exactly one bit flipped.
/// `bit` is taken modulo the bit length.
pub fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    assert!(!bytes.is_empty(), "You cannot tamper with empty bytes");

    let mut tampered = bytes.to_vec();
    let bit = bit % (tampered.len() * 8);
    tampered[bit / 8] ^= 1 << (bit % 8);
    tampered
}

/// Returns a new String where the character at `idx` (modulo length) is
/// replaced by a different lowercase ASCII letter
pub fn tamper_string(s: &str, idx: usize) -> String {
    assert!(!s.is_empty(), "You cannot tamper with an empty string");

    let mut chars: Vec<char> = s.chars().collect();
    let idx = idx % chars.len();
    chars[idx] = if chars[idx] == 'a' { 'b' } else { 'a' };
    chars.into_iter().collect()
}

/// secp256k1 group order
const ORDER: [u8; 32] =
    hex_literal::hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// Returns the `(r, n - s)` twin of an `r || s || v` signature with the
/// recovery parity flipped. Both recover the same public key.
/// `v` keeps its encoding: `{0, 1}` or `{27, 28}`.
pub fn negate_s(signature: &[u8; 65]) -> [u8; 65] {
    let mut negated = *signature;

    let mut borrow = false;
    for i in (0..32).rev() {
        let (diff, b1) = ORDER[i].overflowing_sub(signature[32 + i]);
        let (diff, b2) = diff.overflowing_sub(u8::from(borrow));
        negated[32 + i] = diff;
        borrow = b1 || b2;
    }

    let v = signature[64];
    negated[64] = match v.checked_sub(27) {
        Some(parity) => 27 + (parity ^ 1),
        None => v ^ 1,
    };
    negated
}
