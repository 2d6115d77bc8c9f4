use crate::base::if_rayon;
#[cfg(feature = "rayon")]
use crate::base::slice_ops::MIN_RAYON_LEN;
use curve25519_dalek::scalar::Scalar;
#[cfg(feature = "rayon")]
use rayon::iter::{
    IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator,
    ParallelIterator,
};

/// Folds `scalars` in place down to the half length `mid`.
///
/// With `n = scalars.len()` and `m = n - mid`, the overlap region
/// `[0, m)` becomes `m_low * scalars[i] + m_high * scalars[mid + i]`,
/// and the tail `[m, mid)`, present when the vector is shorter than
/// `2 * mid`, has no high-half partner and is only rescaled by `m_low`.
/// Requires the near-halving contract `0 < mid < n <= 2 * mid`; anything
/// else is a contract violation.
///
/// Entries past `mid` are left untouched; callers shrink the vector's
/// effective length after the fold.
pub fn fold_scalars(scalars: &mut [Scalar], m_low: &Scalar, m_high: &Scalar, mid: usize) {
    let n = scalars.len();
    debug_assert!(0 < mid && mid < n && n <= 2 * mid);
    let m = n - mid;
    let (low, high) = scalars.split_at_mut(mid);
    if_rayon!(
        low[..m]
            .par_iter_mut()
            .with_min_len(MIN_RAYON_LEN)
            .zip(high.par_iter()),
        low[..m].iter_mut().zip(high.iter())
    )
    .for_each(|(low_value, high_value)| *low_value = m_low * *low_value + m_high * high_value);
    for low_value in &mut low[m..] {
        *low_value = m_low * *low_value;
    }
}
