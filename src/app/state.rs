use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::input::InputState;
use crate::lookup::{LookupInvoker, LookupOutcome, SuggestionSource};
use crate::suggestion::{Suggestion, SuggestionList};

/// Application state
///
/// The dispatcher is built once here and lives as long as the input it
/// serves; edits reuse it so its pending timer keeps collapsing bursts.
pub struct App {
    pub input: InputState,
    pub suggestions: SuggestionList,
    pub should_quit: bool,
    /// Suggestion picked with Enter, printed on exit
    pub accepted: Option<Suggestion>,
    dispatcher: Debouncer<String>,
    invoker: LookupInvoker,
    outcome_rx: Receiver<LookupOutcome>,
}

impl App {
    /// Create a new App whose lookups run on `handle`
    pub fn new(handle: Handle, source: Arc<dyn SuggestionSource>, config: &Config) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let invoker = LookupInvoker::new(source, outcome_tx);

        let lookup = invoker.clone();
        let dispatcher = Debouncer::new(
            handle,
            Duration::from_millis(config.search.debounce_ms),
            move |query: String| {
                let lookup = lookup.clone();
                async move { lookup.invoke(query).await }
            },
        );

        Self {
            input: InputState::new(&config.ui.placeholder),
            suggestions: SuggestionList::new(),
            should_quit: false,
            accepted: None,
            dispatcher,
            invoker,
            outcome_rx,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Pre-fill the search box and schedule its lookup
    pub fn set_initial_query(&mut self, query: &str) {
        self.input.set_query(query);
        self.on_query_changed();
    }

    /// Hand the current query to the dispatcher
    pub(crate) fn on_query_changed(&mut self) {
        let query = self.input.query().to_string();
        log::trace!("Query changed: {:?}", query);
        self.dispatcher.call(query);
    }

    /// Whether a lookup is waiting for the typing pause
    pub fn is_debouncing(&self) -> bool {
        self.dispatcher.is_pending()
    }

    /// Number of lookups started so far (blank-query clears included)
    pub fn lookups_issued(&self) -> u64 {
        self.invoker.issued()
    }

    /// Apply every lookup outcome that has arrived
    ///
    /// Returns true if any outcome was accepted. A failed lookup is accepted
    /// without changing the shown suggestions.
    pub fn poll_outcomes(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.suggestions.apply(outcome);
        }
        changed
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
