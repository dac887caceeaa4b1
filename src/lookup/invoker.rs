use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;

use super::{LookupOutcome, SuggestionSource};

/// Runs lookups and reports their outcomes
///
/// Cheap to clone; clones share the sequence counter so outcomes from every
/// clone are ordered against each other.
#[derive(Clone)]
pub struct LookupInvoker {
    source: Arc<dyn SuggestionSource>,
    outcome_tx: Sender<LookupOutcome>,
    next_seq: Arc<AtomicU64>,
}

impl LookupInvoker {
    pub fn new(source: Arc<dyn SuggestionSource>, outcome_tx: Sender<LookupOutcome>) -> Self {
        Self {
            source,
            outcome_tx,
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Look up `query` and report the outcome
    ///
    /// A blank query reports `Cleared` without touching the source. A failed
    /// lookup is logged and reports `Failed`, which settles its sequence
    /// number without changing the shown list.
    pub async fn invoke(&self, query: String) {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().is_empty() {
            self.report(LookupOutcome::Cleared { seq });
            return;
        }

        log::debug!("Lookup {} started for {:?}", seq, query);
        match self.source.search(&query).await {
            Ok(suggestions) => self.report(LookupOutcome::Loaded {
                seq,
                query,
                suggestions,
            }),
            Err(error) => {
                log::error!("Lookup {} for {:?} failed: {}", seq, query, error);
                self.report(LookupOutcome::Failed { seq, query, error });
            }
        }
    }

    /// Number of lookups started so far
    pub fn issued(&self) -> u64 {
        self.next_seq.load(Ordering::SeqCst)
    }

    fn report(&self, outcome: LookupOutcome) {
        if self.outcome_tx.send(outcome).is_err() {
            log::debug!("Outcome receiver dropped; discarding lookup result");
        }
    }
}

#[cfg(test)]
#[path = "invoker_tests.rs"]
mod invoker_tests;
