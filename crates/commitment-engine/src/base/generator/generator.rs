use crate::base::if_rayon;
use curve25519_dalek::ristretto::RistrettoPoint;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

/// Domain label separating the generator map from other uses of the hash.
const GENERATOR_DOMAIN: &[u8] = b"commitment-engine row generator v1";

/// Deterministically derives the generator for row `index`.
///
/// The map from row index to group element is fixed across processes, so
/// provers and verifiers that never exchange generators still agree on
/// every commitment. Derivation hashes the domain label and the
/// little-endian index into 64 uniform bytes and maps them onto the
/// group.
#[must_use]
pub fn derive_generator(index: u64) -> RistrettoPoint {
    let mut hasher = blake3::Hasher::new();
    hasher.update(GENERATOR_DOMAIN);
    hasher.update(&index.to_le_bytes());
    let mut uniform_bytes = [0u8; 64];
    hasher.finalize_xof().fill(&mut uniform_bytes);
    RistrettoPoint::from_uniform_bytes(&uniform_bytes)
}

/// Fills `generators[i] = derive_generator(offset + i)`.
///
/// An empty output slice is a no-op.
pub fn get_generators(generators: &mut [RistrettoPoint], offset: u64) {
    if_rayon!(
        generators.par_iter_mut().with_min_len(32).enumerate(),
        generators.iter_mut().enumerate()
    )
    .for_each(|(i, generator)| *generator = derive_generator(offset + i as u64));
}
