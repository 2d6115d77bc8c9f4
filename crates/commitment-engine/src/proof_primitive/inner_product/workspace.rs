use super::ProofDescriptor;
use crate::execution::{await_stream_result, ComputeFuture, ExecutionStream, StreamBuffer};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use futures::{future, FutureExt};

/// The mutable per-proof round state, tagged by the backend that created
/// it.
///
/// A workspace is exclusively owned by the proof session that created it
/// through [`Driver::make_workspace`](super::Driver::make_workspace) and
/// is dropped when the session completes. Its three vectors are logically
/// halved every round; only their effective length changes, never their
/// allocation.
pub enum Workspace<'a> {
    /// State held in host memory for [`CpuDriver`](super::CpuDriver).
    Cpu(CpuWorkspace<'a>),
    /// State staged into stream-shared buffers for
    /// [`StreamDriver`](super::StreamDriver).
    Stream(StreamWorkspace<'a>),
}

/// Host-memory round state.
pub struct CpuWorkspace<'a> {
    pub(super) descriptor: &'a ProofDescriptor<'a>,
    pub(super) round_index: usize,
    pub(super) a_vector: Vec<Scalar>,
    pub(super) b_vector: Vec<Scalar>,
    pub(super) g_vector: Vec<RistrettoPoint>,
}

/// Stream-resident round state.
pub struct StreamWorkspace<'a> {
    pub(super) descriptor: &'a ProofDescriptor<'a>,
    pub(super) round_index: usize,
    pub(super) a_vector: StreamBuffer<Scalar>,
    pub(super) b_vector: StreamBuffer<Scalar>,
    pub(super) g_vector: StreamBuffer<RistrettoPoint>,
}

impl Workspace<'_> {
    /// The number of fold rounds completed so far.
    #[must_use]
    pub fn round_index(&self) -> usize {
        match self {
            Workspace::Cpu(work) => work.round_index,
            Workspace::Stream(work) => work.round_index,
        }
    }

    /// The effective length of the secret `a` vector.
    #[must_use]
    pub fn a_length(&self) -> usize {
        match self {
            Workspace::Cpu(work) => work.a_vector.len(),
            Workspace::Stream(work) => work.a_vector.len(),
        }
    }

    /// Resolves with the leading element of the `a` vector.
    ///
    /// Once folding has reduced the vector to length one this is the
    /// proof's closing scalar `a'`, which provers hand to the verifier.
    ///
    /// # Panics
    /// Panics if the `a` vector is empty, which a workspace never allows.
    #[must_use]
    pub fn ap_value(&self) -> ComputeFuture<'_, Scalar> {
        match self {
            Workspace::Cpu(work) => future::ready(work.a_vector[0]).boxed(),
            Workspace::Stream(work) => {
                let a_vector = work.a_vector.handle();
                let stream = ExecutionStream::new();
                let value = stream.submit(move || a_vector.read(|a_vector| a_vector[0]));
                async move {
                    let value = await_stream_result(value).await;
                    drop(stream);
                    value
                }
                .boxed()
            }
        }
    }
}
