use super::{Suggestion, SuggestionId};
use crate::lookup::LookupOutcome;

/// Suggestions currently shown under the input
///
/// Replaced wholesale by each accepted lookup outcome. Outcomes carry a
/// sequence number; one that is not newer than the last applied outcome is
/// stale and gets dropped, so an old response can never overwrite the
/// result of a newer lookup, clear or failure. A failure settles its
/// sequence number but keeps the current items.
#[derive(Debug, Default)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    applied_seq: u64,
    selected: Option<usize>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a lookup outcome
    ///
    /// Returns true if the outcome was accepted.
    pub fn apply(&mut self, outcome: LookupOutcome) -> bool {
        let seq = outcome.seq();
        if seq <= self.applied_seq {
            log::debug!(
                "Dropping stale lookup outcome {} (applied: {})",
                seq,
                self.applied_seq
            );
            return false;
        }
        self.applied_seq = seq;

        match outcome {
            LookupOutcome::Loaded {
                query, suggestions, ..
            } => {
                log::debug!("{} suggestions for {:?}", suggestions.len(), query);
                self.replace(suggestions);
            }
            LookupOutcome::Cleared { .. } => self.replace(Vec::new()),
            LookupOutcome::Failed { query, .. } => {
                log::debug!(
                    "Keeping {} suggestions after {:?} failed",
                    self.items.len(),
                    query
                );
            }
        }
        true
    }

    /// Replace the items, keeping the selection on the same id if it survives
    fn replace(&mut self, items: Vec<Suggestion>) {
        let selected_id: Option<SuggestionId> = self.selected_suggestion().map(|s| s.id.clone());
        self.items = items;
        self.selected = selected_id.and_then(|id| self.items.iter().position(|s| s.id == id));
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sequence number of the last accepted outcome (0 before any)
    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Move the selection down, wrapping to the first row
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        });
    }

    /// Move the selection up, wrapping to the last row
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.items.len() - 1;
        self.selected = Some(match self.selected {
            Some(i) if i > 0 => i - 1,
            _ => last,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod list_tests;
