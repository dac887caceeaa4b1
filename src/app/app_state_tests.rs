//! Tests for App state: dispatcher wiring and outcome handling

use super::*;
use crate::error::SuggestError;
use crate::test_utils::test_helpers::{
    FakeSource, key, phone_source, settle, test_app, type_str, wait_for_outcome,
};
use ratatui::crossterm::event::KeyCode;
use std::sync::atomic::Ordering;

#[test]
fn test_new_app_is_empty() {
    let harness = test_app(FakeSource::new());
    let app = &harness.app;

    assert_eq!(app.query(), "");
    assert!(app.suggestions.is_empty());
    assert!(!app.should_quit());
    assert!(!app.is_debouncing());
    assert_eq!(app.lookups_issued(), 0);
}

#[test]
fn test_typing_burst_issues_single_lookup() {
    let source = phone_source();
    let queries = source.query_log();
    let mut harness = test_app(source);
    let app = &mut harness.app;

    type_str(app, "phone");
    assert!(app.is_debouncing());

    assert!(wait_for_outcome(app, 2000), "lookup did not complete");
    assert_eq!(app.suggestions.items(), &[Suggestion::new(1, "Phone X")]);
    assert_eq!(*queries.lock().unwrap(), vec!["phone".to_string()]);
    assert_eq!(app.lookups_issued(), 1);
    assert!(!app.is_debouncing());
}

#[test]
fn test_spaced_edits_each_look_up() {
    let source = FakeSource::new();
    let queries = source.query_log();
    let mut harness = test_app(source);
    let app = &mut harness.app;

    type_str(app, "a");
    assert!(wait_for_outcome(app, 2000));
    type_str(app, "b");
    assert!(wait_for_outcome(app, 2000));

    assert_eq!(*queries.lock().unwrap(), vec!["a".to_string(), "ab".to_string()]);
}

#[test]
fn test_blank_query_clears_without_request() {
    let source = phone_source();
    let calls = source.call_counter();
    let mut harness = test_app(source);
    let app = &mut harness.app;

    type_str(app, "phone");
    assert!(wait_for_outcome(app, 2000));
    assert_eq!(app.suggestions.len(), 1);

    for _ in 0..5 {
        app.handle_key_event(key(KeyCode::Backspace));
    }
    assert_eq!(app.query(), "");
    assert!(wait_for_outcome(app, 2000));

    assert!(app.suggestions.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_whitespace_query_clears_without_request() {
    let source = FakeSource::new();
    let calls = source.call_counter();
    let mut harness = test_app(source);
    let app = &mut harness.app;

    type_str(app, "   ");
    assert!(wait_for_outcome(app, 2000));

    assert!(app.suggestions.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_failed_lookup_keeps_previous_list() {
    let source = phone_source().with(
        "phonex",
        Err(SuggestError::Network("connection reset".to_string())),
    );
    let calls = source.call_counter();
    let mut harness = test_app(source);
    let app = &mut harness.app;

    type_str(app, "phone");
    assert!(wait_for_outcome(app, 2000));

    type_str(app, "x");
    settle(app);

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(app.suggestions.items(), &[Suggestion::new(1, "Phone X")]);
}

#[test]
fn test_same_query_twice_gives_same_list() {
    let mut harness = test_app(phone_source());
    let app = &mut harness.app;

    app.set_initial_query("phone");
    assert!(wait_for_outcome(app, 2000));
    let first = app.suggestions.items().to_vec();

    app.set_initial_query("phone");
    assert!(wait_for_outcome(app, 2000));

    assert_eq!(app.suggestions.items(), first.as_slice());
}

#[test]
fn test_set_initial_query_schedules_lookup() {
    let mut harness = test_app(phone_source());
    let app = &mut harness.app;

    app.set_initial_query("phone");

    assert_eq!(app.query(), "phone");
    assert!(app.is_debouncing());
    assert!(wait_for_outcome(app, 2000));
    assert_eq!(app.suggestions.len(), 1);
}

#[test]
fn test_poll_outcomes_without_lookups() {
    let mut harness = test_app(FakeSource::new());
    assert!(!harness.app.poll_outcomes());
}
