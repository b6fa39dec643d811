//! Background jobs feeding the action queue
//!
//! A job is either a one-shot future resolving to an action (a weather
//! lookup) or an interval emitting an action each period (the spinner
//! tick). Jobs are keyed; starting a job under a busy key aborts the old
//! one, so a superseded lookup never reports back.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use super::action::Action;

pub struct Jobs<A> {
    running: HashMap<&'static str, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A: Action> Jobs<A> {
    /// Job results are sent on `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            running: HashMap::new(),
            action_tx,
        }
    }

    fn start(&mut self, key: &'static str, handle: AbortHandle) {
        self.running.retain(|_, job| !job.is_finished());
        if let Some(previous) = self.running.insert(key, handle) {
            debug!(job = key, "Replaced running job");
            previous.abort();
        }
    }

    /// Run `future` once and send its action.
    pub fn spawn<F>(&mut self, key: &'static str, future: F)
    where
        F: Future<Output = A> + Send + 'static,
    {
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            // a closed queue means the loop already exited
            let _ = tx.send(future.await);
        });
        self.start(key, handle.abort_handle());
    }

    /// Send `make()` every `period`, first one period from now.
    pub fn every<F>(&mut self, key: &'static str, period: Duration, make: F)
    where
        F: Fn() -> A + Send + 'static,
    {
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);
            loop {
                ticker.tick().await;
                if tx.send(make()).is_err() {
                    break;
                }
            }
        });
        self.start(key, handle.abort_handle());
    }

    pub fn abort_all(&mut self) {
        self.running.drain().for_each(|(_, job)| job.abort());
    }
}

impl<A> Drop for Jobs<A> {
    fn drop(&mut self) {
        self.running.values().for_each(AbortHandle::abort);
    }
}
