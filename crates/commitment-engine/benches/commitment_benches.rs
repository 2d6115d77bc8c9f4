//! Benchmarking using the `criterion` crate.
//! To run, execute the following command:
//! ```bash
//! cargo bench -p commitment-engine --bench commitment_benches
//! ```
#![allow(missing_docs)]
use commitment_engine::base::generator::{derive_generator, get_generators};
use commitment_engine::base::sequence::{DenseSequence, IndexedSequence, Sequence};
use commitment_engine::compute::{compute_commitments, init_backend, Backend, Config};
use commitment_engine::proof_primitive::inner_product::{Driver, ProofDescriptor, StreamDriver};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::Identity,
};
use futures::executor::block_on;
use rand::{rngs::StdRng, Rng, SeedableRng};

const COMMITMENT_SIZES: &[usize] = &[16, 256, 4096, 65_536];
const PROOF_SIZES: &[usize] = &[16, 256, 4096];

fn bench_compute_commitments(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("compute_commitments");
    for &n in COMMITMENT_SIZES {
        let data: Vec<u8> = (0..n * 8).map(|_| rng.gen()).collect();
        let sequence = IndexedSequence::from(Sequence::Dense(DenseSequence {
            data: &data,
            element_nbytes: 8,
        }));
        group.bench_with_input(BenchmarkId::from_parameter(n), &sequence, |b, sequence| {
            let mut commitments = [CompressedRistretto::identity()];
            b.iter(|| compute_commitments(&mut commitments, core::slice::from_ref(sequence)));
        });
    }
    group.finish();
}

fn bench_prove_inner_product(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("prove_inner_product");
    group.sample_size(10);
    for &n in PROOF_SIZES {
        let a_vector: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut rng)).collect();
        let b_vector: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut rng)).collect();
        let mut g_vector = vec![RistrettoPoint::identity(); n];
        get_generators(&mut g_vector, 0);
        let q_value = derive_generator(n as u64);
        let descriptor = ProofDescriptor {
            b_vector: &b_vector,
            g_vector: &g_vector,
            q_value: &q_value,
        };
        let x_vector: Vec<Scalar> = (0..n.trailing_zeros())
            .map(|_| Scalar::random(&mut rng))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| {
                let driver = StreamDriver;
                let mut workspace = block_on(driver.make_workspace(&descriptor, &a_vector));
                for x in &x_vector {
                    let _ = block_on(driver.commit_to_fold(&workspace));
                    block_on(driver.fold(&mut workspace, *x));
                }
                block_on(workspace.ap_value())
            });
        });
    }
    group.finish();
}

fn all_benches(c: &mut Criterion) {
    init_backend(&Config {
        backend: Backend::Parallel,
    })
    .unwrap();
    bench_compute_commitments(c);
    bench_prove_inner_product(c);
}

criterion_group!(benches, all_benches);
criterion_main!(benches);
