use std::sync::{Arc, RwLock};

/// An owned buffer staged into stream-shared memory, with a logical
/// length kept separately from the allocation.
///
/// Folding shrinks proof vectors every round; tracking an effective
/// length makes each shrink an O(1) metadata update while the
/// allocation, which in-flight stream jobs may still hold a handle to,
/// never moves.
pub struct StreamBuffer<T> {
    buffer: Arc<RwLock<Vec<T>>>,
    len: usize,
}

impl<T: Send + Sync + 'static> StreamBuffer<T> {
    /// Wraps a staged host buffer.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        let len = values.len();
        StreamBuffer {
            buffer: Arc::new(RwLock::new(values)),
            len,
        }
    }

    /// The effective length of the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the effective length is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reduces the effective length to `len` without touching the
    /// allocation.
    pub fn shrink(&mut self, len: usize) {
        debug_assert!(len <= self.len);
        self.len = len;
    }

    /// A handle for stream jobs, bounded by the effective length at the
    /// time the handle was taken.
    pub(crate) fn handle(&self) -> StreamBufferHandle<T> {
        StreamBufferHandle {
            buffer: Arc::clone(&self.buffer),
            len: self.len,
        }
    }
}

/// A shareable view of a [`StreamBuffer`] captured by stream jobs.
pub(crate) struct StreamBufferHandle<T> {
    buffer: Arc<RwLock<Vec<T>>>,
    len: usize,
}

impl<T> StreamBufferHandle<T> {
    /// Runs `f` over the buffer contents.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let guard = self
            .buffer
            .read()
            .expect("stream buffer poisoned by a failed job");
        f(&guard[..self.len])
    }

    /// Runs `f` over the buffer contents with write access.
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut [T]) -> R) -> R {
        let mut guard = self
            .buffer
            .write()
            .expect("stream buffer poisoned by a failed job");
        f(&mut guard[..self.len])
    }
}
