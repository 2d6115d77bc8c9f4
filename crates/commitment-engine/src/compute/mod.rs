//! Pedersen commitment computation over value sequences, together with
//! the process-wide backend configuration its callers select.
mod backend;
pub use backend::{init_backend, Backend, Config};
pub(crate) use backend::initialized_backend;

mod error;
pub use error::CommitmentError;

mod commitment_computation;
#[cfg(test)]
mod commitment_computation_test;
pub(crate) use commitment_computation::{
    compute_commitments_parallel, compute_commitments_sequential,
};

mod pedersen;
pub use pedersen::{compute_commitments, compute_commitments_with_generators};
