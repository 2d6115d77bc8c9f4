use crate::base::if_rayon;
#[cfg(feature = "rayon")]
use rayon::iter::{
    IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator,
    ParallelIterator,
};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar, traits::Identity};

/// Bit width of a canonical scalar, bounding the digit count of a
/// generator fold decomposition.
const SCALAR_MAX_BITS: usize = 255;

/// Jointly decomposes a fold multiplier pair into shared radix-2 digits.
///
/// Digit `i` packs bit `i` of `m_low` in its low bit and bit `i` of
/// `m_high` in its high bit. Generators fold by multiexponentiation
/// rather than direct scalar combination, and one decomposition per
/// round is shared by every folded element, amortizing its cost across
/// the vector. Trailing zero digits are trimmed.
#[must_use]
pub fn decompose_generator_fold(m_low: &Scalar, m_high: &Scalar) -> Vec<u8> {
    let low_bytes = m_low.to_bytes();
    let high_bytes = m_high.to_bytes();
    let mut digits = vec![0u8; SCALAR_MAX_BITS];
    for (i, digit) in digits.iter_mut().enumerate() {
        let low_bit = (low_bytes[i / 8] >> (i % 8)) & 1;
        let high_bit = (high_bytes[i / 8] >> (i % 8)) & 1;
        *digit = low_bit | (high_bit << 1);
    }
    while digits.last() == Some(&0) {
        digits.pop();
    }
    digits
}

/// One simultaneous double-and-add over the shared digits: computes
/// `m_low * low + m_high * high` for the pair the digits were
/// decomposed from.
fn fold_generator_pair(low: &RistrettoPoint, high: &RistrettoPoint, digits: &[u8]) -> RistrettoPoint {
    let table = [RistrettoPoint::identity(), *low, *high, low + high];
    let mut accumulator = RistrettoPoint::identity();
    for &digit in digits.iter().rev() {
        accumulator = accumulator + accumulator;
        if digit != 0 {
            accumulator += table[digit as usize];
        }
    }
    accumulator
}

/// Folds `generators` in place down to the half length `mid` using a
/// shared digit decomposition of the round's multiplier pair.
///
/// Mirrors [`fold_scalars`](super::fold_scalars): the overlap region
/// combines `generators[i]` and `generators[mid + i]`, while the
/// unpaired tail is rescaled by the low multiplier alone. Requires
/// `0 < mid < n <= 2 * mid`. Entries past `mid` are left untouched;
/// callers shrink the effective length afterwards.
pub fn fold_generators(generators: &mut [RistrettoPoint], digits: &[u8], mid: usize) {
    let n = generators.len();
    debug_assert!(0 < mid && mid < n && n <= 2 * mid);
    let m = n - mid;
    let (low, high) = generators.split_at_mut(mid);
    if_rayon!(
        low[..m].par_iter_mut().with_min_len(32).zip(high.par_iter()),
        low[..m].iter_mut().zip(high.iter())
    )
    .for_each(|(low_value, high_value)| {
        *low_value = fold_generator_pair(low_value, high_value, digits);
    });
    let unpaired_high = RistrettoPoint::identity();
    for low_value in &mut low[m..] {
        *low_value = fold_generator_pair(low_value, &unpaired_high, digits);
    }
}
