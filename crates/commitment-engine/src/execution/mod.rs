//! The asynchronous execution model the proof backends run on.
//!
//! Backend entry points hand back futures: issuing work never blocks,
//! and the caller suspends at each `await` point until the work
//! completes. Independent futures are combined with the `futures` crate
//! join combinators, which resolve only once every constituent has
//! resolved. There is no cancellation or timeout primitive; a future,
//! once created, must be driven to completion.
mod future;
pub use future::ComputeFuture;

mod stream;
pub(crate) use stream::await_stream_result;
pub use stream::ExecutionStream;

mod buffer;
#[cfg(test)]
mod buffer_test;
pub use buffer::StreamBuffer;
