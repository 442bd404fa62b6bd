use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::thread;

use crossbeam::channel::{self, Receiver, Sender};

use crate::error::{BenchError, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed-size pool of worker threads fed from one shared job queue.
///
/// `submit` never blocks. Dropping the pool (or calling `shutdown`) closes the
/// queue, lets the workers finish what was already queued, and joins them.
pub struct WorkerPool {
    sender: Option<Sender<Job>>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(BenchError::Config(
                "worker pool needs at least one thread".to_string(),
            ));
        }

        let (sender, receiver) = channel::unbounded::<Job>();
        let mut workers = Vec::with_capacity(num_threads);
        for n in 1..=num_threads {
            let receiver: Receiver<Job> = receiver.clone();
            let handle = thread::Builder::new()
                .name(format!("bench-worker-{}", n))
                .spawn(move || {
                    while let Ok(job) = receiver.recv() {
                        job();
                    }
                })?;
            workers.push(handle);
        }

        log::debug!("Started worker pool with {} threads", num_threads);
        Ok(Self {
            sender: Some(sender),
            workers,
        })
    }

    /// One thread per available core, or one if that cannot be determined.
    pub fn default_threads() -> usize {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    pub fn num_threads(&self) -> usize {
        self.workers.len()
    }

    pub fn submit<T, F>(&self, task: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (result_tx, result_rx) = channel::bounded(1);
        let job: Job = Box::new(move || {
            let outcome = catch_unwind(AssertUnwindSafe(task))
                .map_err(|payload| BenchError::TaskPanicked(panic_message(payload)));
            // The handle may have been dropped; nobody is waiting then.
            let _ = result_tx.send(outcome);
        });

        if let Some(sender) = &self.sender {
            // Workers hold the receiver until the sender is dropped, so this
            // cannot fail while the pool is alive.
            let _ = sender.send(job);
        }

        TaskHandle {
            receiver: result_rx,
        }
    }

    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.sender = None;
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                log::warn!("Worker thread exited by panic");
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Receives the result of one submitted task.
pub struct TaskHandle<T> {
    receiver: Receiver<Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Blocks until the task has run. A panic inside the task comes back as
    /// `BenchError::TaskPanicked`.
    pub fn join(self) -> Result<T> {
        match self.receiver.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(BenchError::TaskDropped),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(WorkerPool::new(0), Err(BenchError::Config(_))));
    }

    #[test]
    fn test_submit_and_join() {
        let pool = WorkerPool::new(2).unwrap();
        let handles: Vec<_> = (0..10).map(|i| pool.submit(move || i * i)).collect();
        let results: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, (0..10).map(|i| i * i).collect::<Vec<_>>());
    }

    #[test]
    fn test_panic_surfaces_on_join() {
        let pool = WorkerPool::new(1).unwrap();
        let bad = pool.submit(|| -> u32 { panic!("boom") });
        let good = pool.submit(|| 7u32);
        match bad.join() {
            Err(BenchError::TaskPanicked(msg)) => assert!(msg.contains("boom")),
            other => panic!("expected panic error, got {:?}", other),
        }
        // The worker survives a panicking task.
        assert_eq!(good.join().unwrap(), 7);
    }

    #[test]
    fn test_shutdown_drains_queue() {
        let counter = Arc::new(AtomicUsize::new(0));
        let pool = WorkerPool::new(3).unwrap();
        for _ in 0..100 {
            let counter = Arc::clone(&counter);
            pool.submit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        pool.shutdown();
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn test_default_threads_positive() {
        assert!(WorkerPool::default_threads() >= 1);
    }
}
