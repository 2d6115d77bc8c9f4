use futures::channel::oneshot;
use std::{sync::mpsc, thread};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// An ordered execution queue modeled after a device stream.
///
/// Jobs submitted to one stream run in issue order on a dedicated
/// worker. Jobs on different streams are independent and give no
/// relative ordering guarantee. A stream is owned by exactly one value
/// at a time; moving it into a future transfers that ownership, and the
/// final owner releases the worker when it drops the stream, after all
/// queued work has drained.
pub struct ExecutionStream {
    sender: Option<mpsc::Sender<Job>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl ExecutionStream {
    /// Spawns a stream with an empty queue.
    ///
    /// # Panics
    /// Panics if the worker thread cannot be spawned.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker = thread::Builder::new()
            .name("execution-stream".into())
            .spawn(move || {
                for job in receiver {
                    job();
                }
            })
            .expect("failed to spawn execution stream worker");
        ExecutionStream {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Submits a job to the stream, returning a completion that resolves
    /// with the job's result once every previously submitted job and
    /// this one have run.
    ///
    /// # Panics
    /// Panics if the stream's worker has terminated. A failed stream is
    /// fatal to every future chained on it; there is no partial-result
    /// recovery.
    pub fn submit<T, F>(&self, f: F) -> oneshot::Receiver<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (completion, receiver) = oneshot::channel();
        let job: Job = Box::new(move || {
            // the receiver side may already be gone; the work still ran
            // in issue order, which is all the stream guarantees
            let _ = completion.send(f());
        });
        self.sender
            .as_ref()
            .expect("stream queue closed before the stream was dropped")
            .send(job)
            .expect("execution stream worker terminated");
        receiver
    }
}

impl Default for ExecutionStream {
    fn default() -> Self {
        ExecutionStream::new()
    }
}

impl Drop for ExecutionStream {
    fn drop(&mut self) {
        // closing the queue lets the worker exit once it has drained
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Awaits a stream completion, treating a dead stream as fatal.
pub(crate) async fn await_stream_result<T>(completion: oneshot::Receiver<T>) -> T {
    completion
        .await
        .expect("execution stream dropped an in-flight completion")
}
