use futures::future::BoxFuture;

/// A value produced by asynchronously executed backend work.
///
/// The sequential backend resolves these immediately; the stream-backed
/// backend resolves them from worker completions. Callers treat both the
/// same way: await the future, then use the value.
pub type ComputeFuture<'a, T> = BoxFuture<'a, T>;
