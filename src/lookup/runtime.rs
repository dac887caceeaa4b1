//! Lookup runtime thread
//!
//! Debounce timers and HTTP lookups run on a current-thread tokio runtime
//! driven by a dedicated background thread, so the UI thread can block on
//! terminal input without stalling them.

use std::thread::{self, JoinHandle};

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::error::SuggestError;

pub struct LookupRuntime {
    handle: Handle,
    shutdown: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl LookupRuntime {
    /// Spawn the runtime thread
    pub fn start() -> Result<Self, SuggestError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let thread = thread::Builder::new()
            .name("suggestbox-lookup".into())
            .spawn(move || {
                runtime.block_on(token.cancelled());
                log::debug!("Lookup runtime shutting down");
            })?;

        Ok(Self {
            handle,
            shutdown,
            thread: Some(thread),
        })
    }

    /// Handle for spawning onto the runtime
    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }
}

impl Drop for LookupRuntime {
    fn drop(&mut self) {
        self.shutdown.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::warn!("Lookup runtime thread panicked");
        }
    }
}
