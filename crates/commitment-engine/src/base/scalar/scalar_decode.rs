use curve25519_dalek::scalar::Scalar;

/// Decodes a little-endian value into a scalar field element.
///
/// The value is zero-extended from `bytes.len()` bytes to the full field
/// width before reduction, so narrow column encodings commit to the same
/// scalar as their widened counterparts. The byte width must lie in
/// `1..=32`; anything else is a contract violation.
#[must_use]
pub fn scalar_from_le_bytes(bytes: &[u8]) -> Scalar {
    debug_assert!(!bytes.is_empty() && bytes.len() <= 32);
    let mut widened = [0u8; 32];
    widened[..bytes.len()].copy_from_slice(bytes);
    Scalar::from_bytes_mod_order(widened)
}
