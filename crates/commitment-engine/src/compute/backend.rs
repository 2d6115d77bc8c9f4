use super::error::{AlreadyInitializedSnafu, CommitmentError};
use std::sync::OnceLock;

/// The computational backend servicing commitment and proof work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Straightforward host-side computation.
    Sequential,
    /// Work-stealing parallel computation, with proof drivers executing
    /// on stream-backed workers.
    Parallel,
}

/// Process-wide engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// The backend every commitment computation dispatches to.
    pub backend: Backend,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

/// One-time selection of the process-wide backend.
///
/// Call once during startup, before any commitment computation.
/// Reinitializing with the backend already selected is accepted and
/// logged; asking for a different backend after the first call is an
/// error, since callers may already hold results from the original one.
///
/// # Errors
/// Returns [`CommitmentError::AlreadyInitialized`] when a different
/// backend was selected earlier in the process lifetime.
pub fn init_backend(config: &Config) -> Result<(), CommitmentError> {
    init_backend_impl(&BACKEND, config)
}

fn init_backend_impl(slot: &OnceLock<Backend>, config: &Config) -> Result<(), CommitmentError> {
    match slot.set(config.backend) {
        Ok(()) => Ok(()),
        Err(requested) => {
            let current = slot.get().copied().unwrap_or(requested);
            if current == config.backend {
                tracing::warn!(
                    backend = ?current,
                    "commitment backend initialized more than once; keeping the original"
                );
                Ok(())
            } else {
                AlreadyInitializedSnafu { backend: current }.fail()
            }
        }
    }
}

/// The backend selected for this process, if any.
pub(crate) fn initialized_backend() -> Result<Backend, CommitmentError> {
    backend_from(&BACKEND)
}

fn backend_from(slot: &OnceLock<Backend>) -> Result<Backend, CommitmentError> {
    slot.get().copied().ok_or(CommitmentError::NotInitialized)
}
