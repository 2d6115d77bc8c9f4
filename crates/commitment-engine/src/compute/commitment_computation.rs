use crate::base::generator::derive_generator;
use crate::base::sequence::{IndexedSequence, Sequence};
#[cfg(feature = "rayon")]
use crate::base::slice_ops::MIN_RAYON_LEN;
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    traits::Identity,
};
#[cfg(feature = "rayon")]
use curve25519_dalek::traits::VartimeMultiscalarMul;
#[cfg(feature = "rayon")]
use rayon::iter::{
    IndexedParallelIterator, IntoParallelIterator, IntoParallelRefIterator,
    IntoParallelRefMutIterator, ParallelIterator,
};

/// The generator row `row` of `sequence` commits against: the supplied
/// override when one is given, otherwise the deterministic generator for
/// the sequence's logical row index.
fn row_generator(
    sequence: &IndexedSequence<'_>,
    generators: Option<&[RistrettoPoint]>,
    row: usize,
) -> RistrettoPoint {
    match generators {
        Some(generators) => generators[row],
        None => derive_generator(sequence.offset + row as u64),
    }
}

/// Accumulates one sequence's commitment row by row, in ascending order.
///
/// The first row initializes the accumulator and later rows are added
/// onto it; an empty sequence commits to the group identity.
fn commit_sequence(
    sequence: &IndexedSequence<'_>,
    generators: Option<&[RistrettoPoint]>,
) -> RistrettoPoint {
    let Sequence::Dense(dense) = sequence.sequence;
    let mut accumulator = RistrettoPoint::identity();
    for row in 0..dense.len() {
        let term = dense.scalar_at(row) * row_generator(sequence, generators, row);
        accumulator = if row == 0 { term } else { accumulator + term };
    }
    accumulator
}

/// Sequential commitment computation over pre-validated sequences.
pub(crate) fn compute_commitments_sequential(
    commitments: &mut [CompressedRistretto],
    value_sequences: &[IndexedSequence<'_>],
    generators: Option<&[RistrettoPoint]>,
) {
    debug_assert_eq!(commitments.len(), value_sequences.len());
    for (commitment, sequence) in commitments.iter_mut().zip(value_sequences) {
        *commitment = commit_sequence(sequence, generators).compress();
    }
}

/// Chunked multiexponentiation of one sequence's rows; group addition is
/// exact, so the tree-shaped reduction compresses to the same bytes as
/// the row-ascending accumulation.
#[cfg(feature = "rayon")]
fn commit_sequence_chunked(
    sequence: &IndexedSequence<'_>,
    generators: Option<&[RistrettoPoint]>,
) -> RistrettoPoint {
    let Sequence::Dense(dense) = sequence.sequence;
    (0..dense.len())
        .into_par_iter()
        .chunks(MIN_RAYON_LEN)
        .map(|rows| {
            RistrettoPoint::vartime_multiscalar_mul(
                rows.iter().map(|&row| dense.scalar_at(row)),
                rows.iter().map(|&row| row_generator(sequence, generators, row)),
            )
        })
        .reduce(RistrettoPoint::identity, |lhs, rhs| lhs + rhs)
}

/// Parallel commitment computation over pre-validated sequences.
///
/// Produces bit-identical compressed outputs to
/// [`compute_commitments_sequential`]; without the `rayon` feature it is
/// the sequential computation.
pub(crate) fn compute_commitments_parallel(
    commitments: &mut [CompressedRistretto],
    value_sequences: &[IndexedSequence<'_>],
    generators: Option<&[RistrettoPoint]>,
) {
    debug_assert_eq!(commitments.len(), value_sequences.len());
    #[cfg(feature = "rayon")]
    {
        commitments
            .par_iter_mut()
            .zip(value_sequences.par_iter())
            .for_each(|(commitment, sequence)| {
                *commitment = commit_sequence_chunked(sequence, generators).compress();
            });
    }
    #[cfg(not(feature = "rayon"))]
    {
        compute_commitments_sequential(commitments, value_sequences, generators);
    }
}
