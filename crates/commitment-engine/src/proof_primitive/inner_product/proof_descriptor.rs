use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};

/// The public, proof-lifetime parameters of an inner product argument.
///
/// A descriptor is created once by the caller and borrowed by every
/// workspace for the whole proof, so it must outlive every round. It is
/// never mutated and may be shared read-only across concurrent proof
/// sessions.
#[derive(Clone, Copy, Debug)]
pub struct ProofDescriptor<'a> {
    /// The public weight vector the secret vector's inner product is
    /// taken against.
    pub b_vector: &'a [Scalar],
    /// The generator vector commitments fold over.
    pub g_vector: &'a [RistrettoPoint],
    /// The blinding generator carrying the inner product term.
    pub q_value: &'a RistrettoPoint,
}
