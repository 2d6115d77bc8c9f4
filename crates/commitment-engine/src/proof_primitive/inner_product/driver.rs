use super::{ProofDescriptor, ProofError, Workspace};
use crate::execution::ComputeFuture;
use curve25519_dalek::{ristretto::CompressedRistretto, scalar::Scalar};

/// The backend capability set of the inner product argument.
///
/// A driver owns no state of its own; all per-proof state lives in the
/// [`Workspace`] it creates. The two implementations are behaviorally
/// interchangeable: for the same inputs and challenges they produce
/// identical round commitments and the same verification outcome. Every
/// entry point issues its work without blocking and resolves the
/// returned future when the work completes.
///
/// Core routines assume pre-validated input. Mismatched vector sizes,
/// zero fold midpoints, and handing a driver a workspace created by a
/// different backend are contract violations, not recoverable errors.
pub trait Driver {
    /// Builds the round state for proving an inner product of `a_vector`
    /// against the descriptor's `b` and `g` vectors.
    ///
    /// All three vectors must share one power-of-two length. The future
    /// resolves, with `round_index` zero, only once the vectors are
    /// staged into backend-accessible memory.
    fn make_workspace<'a>(
        &self,
        descriptor: &'a ProofDescriptor<'a>,
        a_vector: &[Scalar],
    ) -> ComputeFuture<'a, Workspace<'a>>;

    /// Computes the round's partial commitments `(L, R)`.
    ///
    /// With `mid` the half length of the round's vectors, `L` commits
    /// the low half of `a` against the high halves of `g` and `b`, `R`
    /// the high half of `a` against the low halves, each with the inner
    /// product term on the descriptor's `q` generator. The two halves
    /// are independent and may be computed concurrently; the future
    /// resolves once both are compressed.
    fn commit_to_fold<'a>(
        &self,
        workspace: &'a Workspace<'_>,
    ) -> ComputeFuture<'a, (CompressedRistretto, CompressedRistretto)>;

    /// Folds the workspace vectors to half length under the round
    /// challenge `x`, which the caller derives externally and which must
    /// be nonzero.
    ///
    /// `a` folds with `(x, x⁻¹)`, `b` with `(x⁻¹, x)`, and `g` with the
    /// matching digit decomposition, keeping the commitment binding.
    /// When the fold reaches length one, only `a` is folded; the
    /// protocol is about to finalize and never reads `b` or `g` again.
    /// Increments `round_index`.
    fn fold<'a>(&self, workspace: &'a mut Workspace<'_>, x: Scalar) -> ComputeFuture<'a, ()>;

    /// Reconstructs, without the secret vector, the commitment a
    /// faithful prover would have opened: combines each round's
    /// `(L, R)` pair scaled by `x²` and `x⁻²`, the fully folded
    /// generator and `b` values, and the closing scalar `ap_value`.
    ///
    /// # Errors
    /// Fails with [`ProofError::VerificationError`] when a round
    /// commitment is not a canonical group element encoding.
    fn compute_expected_commitment<'a>(
        &self,
        descriptor: &'a ProofDescriptor<'a>,
        l_vector: &'a [CompressedRistretto],
        r_vector: &'a [CompressedRistretto],
        x_vector: &'a [Scalar],
        ap_value: &'a Scalar,
    ) -> ComputeFuture<'a, Result<CompressedRistretto, ProofError>>;
}
