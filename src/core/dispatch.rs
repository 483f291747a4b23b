//! Single-threaded synchronous dispatch
//!
//! Models "marshal onto the owning thread and block until done": a host
//! whose display must only be touched from one thread hands the logger a
//! `Dispatcher`, and every sink mutation runs on the dispatch thread while
//! the submitting thread waits for the result. There is no fire-and-forget
//! path; `invoke` returns only after the job has run (or the worker is
//! known to be gone).

use super::error::{LoggerError, Result};
use crossbeam_channel::{bounded, unbounded, Sender};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

type Job = Box<dyn FnOnce() + Send + 'static>;

pub struct Dispatcher {
    sender: Option<Sender<Job>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Dispatcher {
    /// Spawn the dispatch thread.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = unbounded::<Job>();

        let handle = thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                // a panicking job must not take the dispatch thread down;
                // the submitter sees the failure through its reply channel
                if catch_unwind(AssertUnwindSafe(job)).is_err() {
                    eprintln!("[LOGPANE ERROR] dispatched job panicked");
                }
            }
        });

        Self {
            sender: Some(sender),
            handle: Some(handle),
        }
    }

    /// Run `job` on the dispatch thread and block until it completes.
    ///
    /// Returns [`LoggerError::DispatcherStopped`] if the worker is gone
    /// or the job died before producing a value.
    pub fn invoke<T, F>(&self, job: F) -> Result<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let sender = self
            .sender
            .as_ref()
            .ok_or(LoggerError::DispatcherStopped)?;
        let (reply, result) = bounded(1);

        sender
            .send(Box::new(move || {
                let _ = reply.send(job());
            }))
            .map_err(|_| LoggerError::DispatcherStopped)?;

        result.recv().map_err(|_| LoggerError::DispatcherStopped)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        // closing the channel lets the worker drain and exit
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                eprintln!("[LOGPANE ERROR] dispatch thread panicked during shutdown");
            }
        }
    }
}
