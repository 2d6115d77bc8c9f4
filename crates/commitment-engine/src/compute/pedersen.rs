use super::error::{
    CommitmentError, InvalidDataLengthSnafu, InvalidElementWidthSnafu, OutputLengthMismatchSnafu,
    TooFewGeneratorsSnafu,
};
use super::{
    compute_commitments_parallel, compute_commitments_sequential, initialized_backend, Backend,
};
use crate::base::sequence::{IndexedSequence, Sequence};
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};

fn validate_request(
    commitments: &[CompressedRistretto],
    value_sequences: &[IndexedSequence<'_>],
    generators: Option<&[RistrettoPoint]>,
) -> Result<(), CommitmentError> {
    if commitments.len() != value_sequences.len() {
        return OutputLengthMismatchSnafu {
            commitments: commitments.len(),
            sequences: value_sequences.len(),
        }
        .fail();
    }
    for indexed in value_sequences {
        let Sequence::Dense(dense) = indexed.sequence;
        if dense.element_nbytes == 0 || dense.element_nbytes > 32 {
            return InvalidElementWidthSnafu {
                element_nbytes: dense.element_nbytes,
            }
            .fail();
        }
        if dense.data.len() % dense.element_nbytes != 0 {
            return InvalidDataLengthSnafu {
                data_len: dense.data.len(),
                element_nbytes: dense.element_nbytes,
            }
            .fail();
        }
    }
    if let Some(generators) = generators {
        let required = value_sequences
            .iter()
            .map(|indexed| indexed.sequence.len())
            .max()
            .unwrap_or(0);
        if generators.len() < required {
            return TooFewGeneratorsSnafu {
                required,
                provided: generators.len(),
            }
            .fail();
        }
    }
    Ok(())
}

fn compute_validated(
    backend: Backend,
    commitments: &mut [CompressedRistretto],
    value_sequences: &[IndexedSequence<'_>],
    generators: Option<&[RistrettoPoint]>,
) {
    match backend {
        Backend::Sequential => {
            compute_commitments_sequential(commitments, value_sequences, generators);
        }
        Backend::Parallel => {
            compute_commitments_parallel(commitments, value_sequences, generators);
        }
    }
}

/// Computes one Pedersen commitment per sequence with the process
/// backend, against the deterministic row generators.
///
/// `commitments[i]` receives the compressed sum, over every row of
/// sequence `i`, of the row's decoded value times the generator for the
/// row's logical index. An empty sequence commits to the canonical
/// encoding of the group identity. Requests with no sequences succeed
/// without doing anything.
///
/// # Errors
/// Rejects the request, writing nothing, when the backend is not
/// initialized, the output slice length does not match the sequence
/// count, an element byte width lies outside `1..=32`, or sequence data
/// does not divide evenly into elements.
#[tracing::instrument(name = "compute::compute_commitments", level = "debug", skip_all)]
pub fn compute_commitments(
    commitments: &mut [CompressedRistretto],
    value_sequences: &[IndexedSequence<'_>],
) -> Result<(), CommitmentError> {
    let backend = initialized_backend()?;
    validate_request(commitments, value_sequences, None)?;
    compute_validated(backend, commitments, value_sequences, None);
    Ok(())
}

/// Computes one Pedersen commitment per sequence with the process
/// backend, against caller-supplied generators.
///
/// Row `i` of every sequence commits against `generators[i]`, so the
/// slice must cover the longest sequence. Passing generators equal to
/// the deterministic ones reproduces [`compute_commitments`] exactly.
///
/// # Errors
/// As [`compute_commitments`], plus rejection when the generator slice
/// is shorter than the longest sequence.
#[tracing::instrument(
    name = "compute::compute_commitments_with_generators",
    level = "debug",
    skip_all
)]
pub fn compute_commitments_with_generators(
    commitments: &mut [CompressedRistretto],
    value_sequences: &[IndexedSequence<'_>],
    generators: &[RistrettoPoint],
) -> Result<(), CommitmentError> {
    let backend = initialized_backend()?;
    validate_request(commitments, value_sequences, Some(generators))?;
    compute_validated(backend, commitments, value_sequences, Some(generators));
    Ok(())
}
