use super::error::VerificationSnafu;
use super::{
    decompose_generator_fold, fold_generators, fold_scalars, CpuWorkspace, Driver,
    ProofDescriptor, ProofError, Workspace,
};
use crate::base::slice_ops::inner_product;
use crate::execution::ComputeFuture;
use core::iter;
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::VartimeMultiscalarMul,
};
use futures::{future, FutureExt};

/// The host-memory backend: every operation computes synchronously and
/// is handed back as an already resolved future.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuDriver;

/// One partial commitment of a round:
/// `multiexp(g_slice, u_vector) + <u_vector, v_vector> * q_value`.
pub(super) fn commit_to_fold_partial(
    g_slice: &[RistrettoPoint],
    q_value: &RistrettoPoint,
    u_vector: &[Scalar],
    v_vector: &[Scalar],
) -> CompressedRistretto {
    let product = inner_product(u_vector, v_vector);
    RistrettoPoint::vartime_multiscalar_mul(
        u_vector.iter().chain(iter::once(&product)),
        g_slice[..u_vector.len()].iter().chain(iter::once(q_value)),
    )
    .compress()
}

/// Verifier-side reconstruction shared by both backends.
///
/// Refolds `b` and `g` with every round's challenge pair, then combines
/// `a'·g' + (a'·b')·q - Σ(xᵢ²·Lᵢ + xᵢ⁻²·Rᵢ)` in one multiexponentiation.
pub(super) fn expected_commitment(
    descriptor: &ProofDescriptor<'_>,
    l_vector: &[CompressedRistretto],
    r_vector: &[CompressedRistretto],
    x_vector: &[Scalar],
    ap_value: &Scalar,
) -> Result<CompressedRistretto, ProofError> {
    let num_rounds = x_vector.len();
    debug_assert_eq!(l_vector.len(), num_rounds);
    debug_assert_eq!(r_vector.len(), num_rounds);
    debug_assert_eq!(descriptor.b_vector.len(), descriptor.g_vector.len());
    debug_assert_eq!(descriptor.g_vector.len(), 1usize << num_rounds);

    let mut x_inv_vector = x_vector.to_vec();
    Scalar::batch_invert(&mut x_inv_vector);

    let mut b_vector = descriptor.b_vector.to_vec();
    let mut g_vector = descriptor.g_vector.to_vec();
    for (x, x_inv) in x_vector.iter().zip(&x_inv_vector) {
        let mid = g_vector.len() / 2;
        fold_scalars(&mut b_vector, x_inv, x, mid);
        b_vector.truncate(mid);
        let digits = decompose_generator_fold(x_inv, x);
        fold_generators(&mut g_vector, &digits, mid);
        g_vector.truncate(mid);
    }
    let b_final = b_vector[0];
    let g_final = g_vector[0];

    let l_points = decompress_all(l_vector)?;
    let r_points = decompress_all(r_vector)?;
    let x_sq_negated = x_vector.iter().map(|x| -(x * x));
    let x_inv_sq_negated = x_inv_vector.iter().map(|x_inv| -(x_inv * x_inv));

    let commitment = RistrettoPoint::vartime_multiscalar_mul(
        iter::once(*ap_value)
            .chain(iter::once(ap_value * b_final))
            .chain(x_sq_negated)
            .chain(x_inv_sq_negated),
        iter::once(g_final)
            .chain(iter::once(*descriptor.q_value))
            .chain(l_points)
            .chain(r_points),
    );
    Ok(commitment.compress())
}

fn decompress_all(
    commitments: &[CompressedRistretto],
) -> Result<Vec<RistrettoPoint>, ProofError> {
    commitments
        .iter()
        .map(|commitment| {
            commitment.decompress().ok_or(
                VerificationSnafu {
                    error: "a round commitment is not a canonical group element encoding",
                }
                .build(),
            )
        })
        .collect()
}

impl Driver for CpuDriver {
    #[tracing::instrument(name = "CpuDriver::make_workspace", level = "debug", skip_all)]
    fn make_workspace<'a>(
        &self,
        descriptor: &'a ProofDescriptor<'a>,
        a_vector: &[Scalar],
    ) -> ComputeFuture<'a, Workspace<'a>> {
        debug_assert_eq!(a_vector.len(), descriptor.b_vector.len());
        debug_assert_eq!(a_vector.len(), descriptor.g_vector.len());
        debug_assert!(a_vector.len().is_power_of_two());
        future::ready(Workspace::Cpu(CpuWorkspace {
            descriptor,
            round_index: 0,
            a_vector: a_vector.to_vec(),
            b_vector: descriptor.b_vector.to_vec(),
            g_vector: descriptor.g_vector.to_vec(),
        }))
        .boxed()
    }

    #[tracing::instrument(name = "CpuDriver::commit_to_fold", level = "debug", skip_all)]
    fn commit_to_fold<'a>(
        &self,
        workspace: &'a Workspace<'_>,
    ) -> ComputeFuture<'a, (CompressedRistretto, CompressedRistretto)> {
        let Workspace::Cpu(work) = workspace else {
            panic!("CpuDriver requires a workspace it created");
        };
        let mid = work.g_vector.len() / 2;
        debug_assert!(mid > 0);
        let (a_low, a_high) = work.a_vector.split_at(mid);
        let (b_low, b_high) = work.b_vector.split_at(mid);
        let (g_low, g_high) = work.g_vector.split_at(mid);
        let q_value = work.descriptor.q_value;
        let l_value = commit_to_fold_partial(g_high, q_value, a_low, b_high);
        let r_value = commit_to_fold_partial(g_low, q_value, a_high, b_low);
        future::ready((l_value, r_value)).boxed()
    }

    #[tracing::instrument(name = "CpuDriver::fold", level = "debug", skip_all)]
    fn fold<'a>(&self, workspace: &'a mut Workspace<'_>, x: Scalar) -> ComputeFuture<'a, ()> {
        let Workspace::Cpu(work) = workspace else {
            panic!("CpuDriver requires a workspace it created");
        };
        let mid = work.g_vector.len() / 2;
        debug_assert!(mid > 0);
        work.round_index += 1;
        let x_inv = x.invert();

        fold_scalars(&mut work.a_vector, &x, &x_inv, mid);
        work.a_vector.truncate(mid);
        if mid == 1 {
            // the terminal round leaves only a'; b and g are never read
            // again
            return future::ready(()).boxed();
        }

        fold_scalars(&mut work.b_vector, &x_inv, &x, mid);
        work.b_vector.truncate(mid);

        let digits = decompose_generator_fold(&x_inv, &x);
        fold_generators(&mut work.g_vector, &digits, mid);
        work.g_vector.truncate(mid);
        future::ready(()).boxed()
    }

    #[tracing::instrument(
        name = "CpuDriver::compute_expected_commitment",
        level = "debug",
        skip_all
    )]
    fn compute_expected_commitment<'a>(
        &self,
        descriptor: &'a ProofDescriptor<'a>,
        l_vector: &'a [CompressedRistretto],
        r_vector: &'a [CompressedRistretto],
        x_vector: &'a [Scalar],
        ap_value: &'a Scalar,
    ) -> ComputeFuture<'a, Result<CompressedRistretto, ProofError>> {
        future::ready(expected_commitment(
            descriptor, l_vector, r_vector, x_vector, ap_value,
        ))
        .boxed()
    }
}
