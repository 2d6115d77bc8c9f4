//! The recursive inner product argument: proof-lifetime descriptor,
//! per-proof workspaces, the folding kernels that halve round state, and
//! the interchangeable backends that drive the protocol.
//!
//! Challenge scalars are supplied by the caller each round, typically
//! from a transcript hash; this module never derives them itself.
mod proof_descriptor;
pub use proof_descriptor::ProofDescriptor;

mod error;
pub use error::ProofError;

mod workspace;
pub use workspace::{CpuWorkspace, StreamWorkspace, Workspace};

mod driver;
pub use driver::Driver;

mod fold_scalars;
pub use fold_scalars::fold_scalars;

mod generator_fold;
pub use generator_fold::{decompose_generator_fold, fold_generators};

mod cpu_driver;
pub use cpu_driver::CpuDriver;

mod stream_driver;
pub use stream_driver::StreamDriver;
