//! Commits to a column of values, then proves and verifies an inner
//! product against a public vector.
//!
//! Run with `cargo run --example prove_inner_product`.

use commitment_engine::base::generator::{derive_generator, get_generators};
use commitment_engine::base::sequence::{DenseSequence, IndexedSequence, Sequence};
use commitment_engine::compute::{compute_commitments, init_backend, Backend, Config};
use commitment_engine::proof_primitive::inner_product::{
    CpuDriver, Driver, ProofDescriptor, StreamDriver,
};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::{Identity, VartimeMultiscalarMul},
};
use futures::executor::block_on;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    init_backend(&Config {
        backend: Backend::Parallel,
    })
    .unwrap();

    // commit to a little-endian u32 column
    let column: Vec<u32> = vec![2000, 7500, 5000, 1500];
    let data: Vec<u8> = column.iter().flat_map(|value| value.to_le_bytes()).collect();
    let sequence = IndexedSequence::from(Sequence::Dense(DenseSequence {
        data: &data,
        element_nbytes: 4,
    }));
    let mut commitments = [CompressedRistretto::identity()];
    compute_commitments(&mut commitments, &[sequence]).unwrap();
    println!("column commitment: {:?}", commitments[0]);

    // prove knowledge of the column's inner product with a public vector
    let n = column.len();
    let mut rng = StdRng::seed_from_u64(42);
    let a_vector: Vec<Scalar> = column.iter().map(|&value| Scalar::from(value)).collect();
    let b_vector: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut rng)).collect();
    let mut g_vector = vec![RistrettoPoint::identity(); n];
    get_generators(&mut g_vector, 0);
    let q_value = derive_generator(n as u64);
    let descriptor = ProofDescriptor {
        b_vector: &b_vector,
        g_vector: &g_vector,
        q_value: &q_value,
    };

    let product: Scalar = a_vector.iter().zip(&b_vector).map(|(a, b)| a * b).sum();
    let commitment = RistrettoPoint::vartime_multiscalar_mul(
        a_vector.iter().chain(std::iter::once(&product)),
        g_vector.iter().chain(std::iter::once(&q_value)),
    )
    .compress();

    let driver = StreamDriver;
    let mut workspace = block_on(driver.make_workspace(&descriptor, &a_vector));
    let mut l_vector = Vec::new();
    let mut r_vector = Vec::new();
    let mut x_vector = Vec::new();
    while workspace.a_length() > 1 {
        let (l_value, r_value) = block_on(driver.commit_to_fold(&workspace));
        // stand-in for a transcript challenge
        let x = Scalar::random(&mut rng);
        block_on(driver.fold(&mut workspace, x));
        l_vector.push(l_value);
        r_vector.push(r_value);
        x_vector.push(x);
    }
    let ap_value = block_on(workspace.ap_value());
    println!("proof rounds: {}", x_vector.len());

    let expected = block_on(CpuDriver.compute_expected_commitment(
        &descriptor,
        &l_vector,
        &r_vector,
        &x_vector,
        &ap_value,
    ))
    .unwrap();
    assert_eq!(expected, commitment);
    println!("inner product proof verified");
}
