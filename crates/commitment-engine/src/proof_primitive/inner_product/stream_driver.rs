use super::{
    cpu_driver::{self, commit_to_fold_partial},
    decompose_generator_fold, fold_generators, fold_scalars, Driver, ProofDescriptor, ProofError,
    StreamWorkspace, Workspace,
};
use crate::execution::{
    await_stream_result, ComputeFuture, ExecutionStream, StreamBuffer,
};
use curve25519_dalek::{ristretto::CompressedRistretto, scalar::Scalar};
use futures::FutureExt;

/// The stream backend: round work runs as jobs on [`ExecutionStream`]
/// queues against buffers staged with [`StreamBuffer`], so independent
/// pieces of a round proceed concurrently.
#[derive(Clone, Copy, Debug, Default)]
pub struct StreamDriver;

impl Driver for StreamDriver {
    #[tracing::instrument(name = "StreamDriver::make_workspace", level = "debug", skip_all)]
    fn make_workspace<'a>(
        &self,
        descriptor: &'a ProofDescriptor<'a>,
        a_vector: &[Scalar],
    ) -> ComputeFuture<'a, Workspace<'a>> {
        debug_assert_eq!(a_vector.len(), descriptor.b_vector.len());
        debug_assert_eq!(a_vector.len(), descriptor.g_vector.len());
        debug_assert!(a_vector.len().is_power_of_two());
        let a_vector = a_vector.to_vec();
        let b_vector = descriptor.b_vector.to_vec();
        let g_vector = descriptor.g_vector.to_vec();

        let stream = ExecutionStream::new();
        let staged = stream.submit(move || {
            (
                StreamBuffer::new(a_vector),
                StreamBuffer::new(b_vector),
                StreamBuffer::new(g_vector),
            )
        });
        async move {
            let (a_vector, b_vector, g_vector) = await_stream_result(staged).await;
            drop(stream);
            Workspace::Stream(StreamWorkspace {
                descriptor,
                round_index: 0,
                a_vector,
                b_vector,
                g_vector,
            })
        }
        .boxed()
    }

    #[tracing::instrument(name = "StreamDriver::commit_to_fold", level = "debug", skip_all)]
    fn commit_to_fold<'a>(
        &self,
        workspace: &'a Workspace<'_>,
    ) -> ComputeFuture<'a, (CompressedRistretto, CompressedRistretto)> {
        let Workspace::Stream(work) = workspace else {
            panic!("StreamDriver requires a workspace it created");
        };
        let mid = work.g_vector.len() / 2;
        debug_assert!(mid > 0);
        let q_value = *work.descriptor.q_value;

        // the two partials touch disjoint halves, so each gets its own
        // stream
        let l_stream = ExecutionStream::new();
        let r_stream = ExecutionStream::new();

        let (a_handle, b_handle, g_handle) =
            (work.a_vector.handle(), work.b_vector.handle(), work.g_vector.handle());
        let l_value = l_stream.submit(move || {
            a_handle.read(|a_vector| {
                b_handle.read(|b_vector| {
                    g_handle.read(|g_vector| {
                        commit_to_fold_partial(
                            &g_vector[mid..],
                            &q_value,
                            &a_vector[..mid],
                            &b_vector[mid..],
                        )
                    })
                })
            })
        });

        let (a_handle, b_handle, g_handle) =
            (work.a_vector.handle(), work.b_vector.handle(), work.g_vector.handle());
        let r_value = r_stream.submit(move || {
            a_handle.read(|a_vector| {
                b_handle.read(|b_vector| {
                    g_handle.read(|g_vector| {
                        commit_to_fold_partial(
                            &g_vector[..mid],
                            &q_value,
                            &a_vector[mid..],
                            &b_vector[..mid],
                        )
                    })
                })
            })
        });

        async move {
            let (l_value, r_value) = futures::join!(
                await_stream_result(l_value),
                await_stream_result(r_value)
            );
            drop(l_stream);
            drop(r_stream);
            (l_value, r_value)
        }
        .boxed()
    }

    #[tracing::instrument(name = "StreamDriver::fold", level = "debug", skip_all)]
    fn fold<'a>(&self, workspace: &'a mut Workspace<'_>, x: Scalar) -> ComputeFuture<'a, ()> {
        let Workspace::Stream(work) = workspace else {
            panic!("StreamDriver requires a workspace it created");
        };
        let mid = work.g_vector.len() / 2;
        debug_assert!(mid > 0);
        work.round_index += 1;
        let x_inv = x.invert();

        // handles must be taken before the host-side shrink so the jobs
        // see the full pre-fold vectors
        let a_handle = work.a_vector.handle();
        let a_stream = ExecutionStream::new();
        let a_folded = a_stream.submit(move || {
            a_handle.write(|a_vector| fold_scalars(a_vector, &x, &x_inv, mid));
        });
        work.a_vector.shrink(mid);
        if mid == 1 {
            // the terminal round leaves only a'; b and g are never read
            // again
            return async move {
                await_stream_result(a_folded).await;
                drop(a_stream);
            }
            .boxed();
        }

        let b_handle = work.b_vector.handle();
        let b_stream = ExecutionStream::new();
        let b_folded = b_stream.submit(move || {
            b_handle.write(|b_vector| fold_scalars(b_vector, &x_inv, &x, mid));
        });
        work.b_vector.shrink(mid);

        let digits = decompose_generator_fold(&x_inv, &x);
        let g_handle = work.g_vector.handle();
        let g_stream = ExecutionStream::new();
        let g_folded = g_stream.submit(move || {
            g_handle.write(|g_vector| fold_generators(g_vector, &digits, mid));
        });
        work.g_vector.shrink(mid);

        async move {
            futures::join!(
                await_stream_result(a_folded),
                await_stream_result(b_folded),
                await_stream_result(g_folded)
            );
            drop(a_stream);
            drop(b_stream);
            drop(g_stream);
        }
        .boxed()
    }

    #[tracing::instrument(
        name = "StreamDriver::compute_expected_commitment",
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
        // verification holds no secret state and is cheap relative to
        // proving; it runs on the host for both backends
        futures::future::ready(cpu_driver::expected_commitment(
            descriptor, l_vector, r_vector, x_vector, ap_value,
        ))
        .boxed()
    }
}
