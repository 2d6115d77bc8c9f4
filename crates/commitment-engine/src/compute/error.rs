use super::Backend;
use snafu::Snafu;

/// These errors occur when a commitment computation request is rejected
/// at the boundary. Core routines assume validated input; everything
/// here is reported before any output is written.
#[derive(Snafu, Debug, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum CommitmentError {
    #[snafu(display("the commitment backend has not been initialized"))]
    /// No backend has been selected with [`init_backend`](super::init_backend).
    NotInitialized,
    #[snafu(display("the commitment backend was already initialized as {backend:?}"))]
    /// A different backend was already selected for this process.
    AlreadyInitialized {
        /// The backend the process is committed to.
        backend: Backend,
    },
    #[snafu(display(
        "expected one output commitment per sequence, got {commitments} outputs for {sequences} sequences"
    ))]
    /// The output slice length differs from the number of sequences.
    OutputLengthMismatch {
        /// Length of the output slice.
        commitments: usize,
        /// Number of input sequences.
        sequences: usize,
    },
    #[snafu(display("element byte width {element_nbytes} lies outside 1..=32"))]
    /// A sequence's element byte width lies outside `1..=32`.
    InvalidElementWidth {
        /// The rejected byte width.
        element_nbytes: usize,
    },
    #[snafu(display(
        "sequence data of {data_len} bytes does not divide into elements of {element_nbytes} bytes"
    ))]
    /// A dense sequence's data does not divide evenly into elements.
    InvalidDataLength {
        /// Byte length of the sequence data.
        data_len: usize,
        /// The sequence's element byte width.
        element_nbytes: usize,
    },
    #[snafu(display("{required} generators are required but only {provided} were provided"))]
    /// The generator slice is shorter than the longest sequence.
    TooFewGenerators {
        /// Row count of the longest sequence.
        required: usize,
        /// Length of the provided generator slice.
        provided: usize,
    },
}
