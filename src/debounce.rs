//! Debounced dispatch
//!
//! Wraps an asynchronous callback so that a burst of calls collapses into a
//! single invocation carrying the last argument. Each [`Debouncer`] owns at
//! most one pending timer; a new call aborts it and starts another.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Callback<A> = Arc<dyn Fn(A) -> BoxFuture<'static, ()> + Send + Sync>;

/// Delays a callback until calls stop arriving for `delay`
pub struct Debouncer<A> {
    delay: Duration,
    callback: Callback<A>,
    handle: Handle,
    /// The single outstanding timer, if any
    pending: Option<JoinHandle<()>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Create a debouncer whose timers run on `handle`
    ///
    /// # Arguments
    /// * `handle` - Runtime that owns the timer and the spawned callback
    /// * `delay` - Quiet period required before the callback fires
    /// * `callback` - Invoked with the latest argument once the burst ends
    pub fn new<F, Fut>(handle: Handle, delay: Duration, callback: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            delay,
            callback: Arc::new(move |arg| callback(arg).boxed()),
            handle,
            pending: None,
        }
    }

    /// Schedule the callback with `arg`, replacing any pending schedule
    ///
    /// The callback runs as its own task once the timer fires, so a later
    /// call only ever cancels a timer, never a callback already running.
    pub fn call(&mut self, arg: A) {
        if self.cancel() {
            log::trace!("Debounce timer reset");
        }

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(callback(arg));
        }));
    }

    /// Abort the pending timer
    ///
    /// Returns true if a timer was still waiting to fire.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(timer) if !timer.is_finished() => {
                timer.abort();
                true
            }
            _ => false,
        }
    }

    /// Whether a timer is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
