//! Runs directory lookups off the UI thread.
//!
//! Each request gets its own short-lived thread. Results are posted back on
//! a channel, so the event loop applies them in arrival order alongside key
//! events.

use crate::domain::{run_request, DirectoryService, FetchOutcome, FetchRequest};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};

pub struct FetchWorker<S, T> {
    service: Arc<S>,
    tx: mpsc::Sender<T>,
}

impl<S, T> FetchWorker<S, T>
where
    S: DirectoryService + Send + Sync + 'static,
    T: From<FetchOutcome> + Send + 'static,
{
    pub fn new(service: Arc<S>, tx: mpsc::Sender<T>) -> Self {
        Self { service, tx }
    }

    pub fn dispatch(&self, request: FetchRequest) -> JoinHandle<()> {
        tracing::debug!(?request, "dispatching directory lookup");
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = run_request(service.as_ref(), request);
            // receiver gone means the screen was closed
            let _ = tx.send(outcome.into());
        })
    }
}
