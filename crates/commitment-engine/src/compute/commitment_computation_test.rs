use super::commitment_computation::{
    compute_commitments_parallel, compute_commitments_sequential,
};
use crate::base::generator::{derive_generator, get_generators};
use crate::base::sequence::{DenseSequence, IndexedSequence, Sequence};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::Identity,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn dense(data: &[u8], element_nbytes: usize) -> IndexedSequence<'_> {
    Sequence::Dense(DenseSequence {
        data,
        element_nbytes,
    })
    .into()
}

#[test]
fn test_empty_sequence_commits_to_the_identity() {
    let mut commitments = [CompressedRistretto::identity()];
    compute_commitments_sequential(&mut commitments, &[dense(&[], 4)], None);
    assert_eq!(commitments[0], RistrettoPoint::identity().compress());
}

#[test]
fn test_single_row_commitment_is_a_scalar_multiple_of_its_generator() {
    let data = [3u8];
    let mut commitments = [CompressedRistretto::identity()];
    compute_commitments_sequential(&mut commitments, &[dense(&data, 1)], None);
    let expected = Scalar::from(3u64) * derive_generator(0);
    assert_eq!(commitments[0], expected.compress());
}

#[test]
fn test_commitments_accumulate_rows_against_indexed_generators() {
    let data = [2u8, 5, 9];
    let mut commitments = [CompressedRistretto::identity()];
    compute_commitments_sequential(&mut commitments, &[dense(&data, 1)], None);
    let expected = Scalar::from(2u64) * derive_generator(0)
        + Scalar::from(5u64) * derive_generator(1)
        + Scalar::from(9u64) * derive_generator(2);
    assert_eq!(commitments[0], expected.compress());
}

#[test]
fn test_sequence_offsets_shift_the_generator_selection() {
    let data = [4u8, 7];
    let mut indexed = dense(&data, 1);
    indexed.offset = 11;
    let mut commitments = [CompressedRistretto::identity()];
    compute_commitments_sequential(&mut commitments, &[indexed], None);
    let expected =
        Scalar::from(4u64) * derive_generator(11) + Scalar::from(7u64) * derive_generator(12);
    assert_eq!(commitments[0], expected.compress());
}

#[test]
fn test_narrow_values_are_zero_extended() {
    let narrow = [250u8, 1];
    let widened = [250u8, 0, 0, 0, 1, 0, 0, 0];
    let mut narrow_commit = [CompressedRistretto::identity()];
    let mut widened_commit = [CompressedRistretto::identity()];
    compute_commitments_sequential(&mut narrow_commit, &[dense(&narrow, 1)], None);
    compute_commitments_sequential(&mut widened_commit, &[dense(&widened, 4)], None);
    assert_eq!(narrow_commit, widened_commit);
}

#[test]
fn test_override_generators_replace_the_deterministic_map() {
    let data = [1u8, 2, 3];
    let mut rng = StdRng::seed_from_u64(57);
    let generators: Vec<_> = (0..3)
        .map(|_| Scalar::random(&mut rng) * derive_generator(999))
        .collect();
    let mut commitments = [CompressedRistretto::identity()];
    compute_commitments_sequential(&mut commitments, &[dense(&data, 1)], Some(&generators));
    let expected = Scalar::from(1u64) * generators[0]
        + Scalar::from(2u64) * generators[1]
        + Scalar::from(3u64) * generators[2];
    assert_eq!(commitments[0], expected.compress());
}

#[test]
fn test_override_with_the_default_generators_changes_nothing() {
    let data: Vec<u8> = (0..100u8).collect();
    let mut generators = vec![RistrettoPoint::identity(); 100];
    get_generators(&mut generators, 0);
    let mut defaulted = [CompressedRistretto::identity()];
    let mut overridden = [CompressedRistretto::identity()];
    compute_commitments_sequential(&mut defaulted, &[dense(&data, 1)], None);
    compute_commitments_sequential(&mut overridden, &[dense(&data, 1)], Some(&generators));
    assert_eq!(defaulted, overridden);
}

#[test]
fn test_parallel_and_sequential_backends_agree_bit_for_bit() {
    let mut rng = StdRng::seed_from_u64(123);
    for &(n, element_nbytes) in &[(0usize, 4usize), (1, 1), (5, 3), (300, 8), (1000, 32)] {
        let data: Vec<u8> = (0..n * element_nbytes).map(|_| rng.gen()).collect();
        let sequences = [dense(&data, element_nbytes)];
        let mut sequential = [CompressedRistretto::identity()];
        let mut parallel = [CompressedRistretto::identity()];
        compute_commitments_sequential(&mut sequential, &sequences, None);
        compute_commitments_parallel(&mut parallel, &sequences, None);
        assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_backends_agree_across_multiple_sequences() {
    let mut rng = StdRng::seed_from_u64(321);
    let first: Vec<u8> = (0..64).map(|_| rng.gen()).collect();
    let second: Vec<u8> = (0..999).map(|_| rng.gen()).collect();
    let sequences = [dense(&first, 2), dense(&second, 9), dense(&[], 1)];
    let mut sequential = [CompressedRistretto::identity(); 3];
    let mut parallel = [CompressedRistretto::identity(); 3];
    compute_commitments_sequential(&mut sequential, &sequences, None);
    compute_commitments_parallel(&mut parallel, &sequences, None);
    assert_eq!(sequential, parallel);
}
