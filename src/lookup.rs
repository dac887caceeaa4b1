//! Lookup module
//!
//! Turns a query into suggestions. The [`LookupInvoker`] runs on the lookup
//! runtime, asks a [`SuggestionSource`] for results and reports each outcome,
//! failures included, to the UI thread over a channel.

mod http;
mod invoker;
mod runtime;

use futures::future::BoxFuture;

use crate::error::SuggestError;
use crate::suggestion::Suggestion;

pub use http::HttpSource;
pub use invoker::LookupInvoker;
pub use runtime::LookupRuntime;

/// Result of one lookup, delivered to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The source answered for `query`
    Loaded {
        seq: u64,
        query: String,
        suggestions: Vec<Suggestion>,
    },
    /// The query was blank; no request was made
    Cleared { seq: u64 },
    /// The source failed for `query`; the shown list stays as it is
    Failed {
        seq: u64,
        query: String,
        error: SuggestError,
    },
}

impl LookupOutcome {
    /// Sequence number taken when the lookup started
    pub fn seq(&self) -> u64 {
        match self {
            LookupOutcome::Loaded { seq, .. }
            | LookupOutcome::Cleared { seq }
            | LookupOutcome::Failed { seq, .. } => *seq,
        }
    }
}

/// Something that can answer a suggestion query
pub trait SuggestionSource: Send + Sync {
    /// Look up suggestions for a non-blank query
    fn search(&self, query: &str) -> BoxFuture<'static, Result<Vec<Suggestion>, SuggestError>>;
}
