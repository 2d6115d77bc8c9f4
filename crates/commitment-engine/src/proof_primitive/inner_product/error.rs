use snafu::Snafu;

/// These errors occur when an inner product argument fails to verify.
#[derive(Snafu, Debug, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum ProofError {
    #[snafu(display("verification error: {error}"))]
    /// This error occurs when a proof failed to verify.
    VerificationError {
        /// Description of the failure.
        error: &'static str,
    },
}
