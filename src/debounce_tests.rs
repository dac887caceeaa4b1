//! Tests for Debouncer
//!
//! All tests run on a paused tokio clock so timings are exact.

use super::*;
use proptest::prelude::*;
use std::sync::Mutex;
use tokio::time::sleep;

const DELAY: Duration = Duration::from_millis(500);

type Calls = Arc<Mutex<Vec<String>>>;

fn recording_debouncer(delay: Duration) -> (Calls, Debouncer<String>) {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let debouncer = Debouncer::new(Handle::current(), delay, move |arg: String| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().unwrap().push(arg);
        }
    });
    (calls, debouncer)
}

fn recorded(calls: &Calls) -> Vec<String> {
    calls.lock().unwrap().clone()
}

#[tokio::test(start_paused = true)]
async fn test_burst_collapses_to_last_argument() {
    let (calls, mut debouncer) = recording_debouncer(DELAY);

    for query in ["p", "ph", "pho", "phon", "phone"] {
        debouncer.call(query.to_string());
        sleep(Duration::from_millis(100)).await;
    }
    assert!(recorded(&calls).is_empty(), "nothing fires mid-burst");

    sleep(DELAY * 2).await;
    assert_eq!(recorded(&calls), vec!["phone"]);
}

#[tokio::test(start_paused = true)]
async fn test_spaced_calls_each_fire() {
    let (calls, mut debouncer) = recording_debouncer(DELAY);

    debouncer.call("a".to_string());
    sleep(DELAY + Duration::from_millis(100)).await;
    debouncer.call("b".to_string());
    sleep(DELAY + Duration::from_millis(100)).await;

    assert_eq!(recorded(&calls), vec!["a", "b"]);
}

#[tokio::test(start_paused = true)]
async fn test_fires_only_after_delay() {
    let (calls, mut debouncer) = recording_debouncer(DELAY);

    debouncer.call("x".to_string());
    sleep(DELAY - Duration::from_millis(1)).await;
    assert!(recorded(&calls).is_empty());

    sleep(Duration::from_millis(2)).await;
    assert_eq!(recorded(&calls), vec!["x"]);
}

#[tokio::test(start_paused = true)]
async fn test_is_pending_tracks_timer() {
    let (_calls, mut debouncer) = recording_debouncer(DELAY);
    assert!(!debouncer.is_pending());

    debouncer.call("x".to_string());
    assert!(debouncer.is_pending());

    sleep(DELAY + Duration::from_millis(1)).await;
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_suppresses_call() {
    let (calls, mut debouncer) = recording_debouncer(DELAY);

    debouncer.call("x".to_string());
    assert!(debouncer.cancel());
    assert!(!debouncer.cancel(), "second cancel has nothing to abort");

    sleep(DELAY * 2).await;
    assert!(recorded(&calls).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_timer() {
    let (calls, mut debouncer) = recording_debouncer(DELAY);

    debouncer.call("x".to_string());
    drop(debouncer);

    sleep(DELAY * 2).await;
    assert!(recorded(&calls).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_zero_delay_still_fires_once() {
    let (calls, mut debouncer) = recording_debouncer(Duration::ZERO);

    debouncer.call("a".to_string());
    debouncer.call("b".to_string());
    sleep(Duration::from_millis(1)).await;

    assert_eq!(recorded(&calls), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn test_new_call_does_not_cancel_running_callback() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let mut debouncer = Debouncer::new(Handle::current(), DELAY, move |arg: String| {
        let sink = Arc::clone(&sink);
        async move {
            // Simulates a slow lookup
            sleep(Duration::from_millis(1000)).await;
            sink.lock().unwrap().push(arg);
        }
    });

    debouncer.call("a".to_string());
    sleep(DELAY + Duration::from_millis(100)).await;
    // "a" is now in flight; a new call only replaces the timer
    debouncer.call("b".to_string());

    sleep(Duration::from_millis(3000)).await;
    assert_eq!(recorded(&calls), vec!["a", "b"]);
}

#[test]
fn test_delay_accessor() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let debouncer: Debouncer<String> =
        Debouncer::new(rt.handle().clone(), DELAY, |_arg: String| async {});
    assert_eq!(debouncer.delay(), DELAY);
}

// For any burst where consecutive calls are closer than the delay,
// exactly one callback fires and it carries the last argument.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_burst_fires_once_with_last_argument(
        args in prop::collection::vec("[a-z ]{0,8}", 1..15),
        gaps in prop::collection::vec(0u64..500u64, 15),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .start_paused(true)
            .build()
            .unwrap();

        let result = rt.block_on(async {
            let (calls, mut debouncer) = recording_debouncer(DELAY);
            for (arg, gap) in args.iter().zip(gaps.iter()) {
                debouncer.call(arg.clone());
                sleep(Duration::from_millis(*gap)).await;
            }
            sleep(DELAY * 2).await;
            recorded(&calls)
        });

        prop_assert_eq!(result, vec![args.last().unwrap().clone()]);
    }

    #[test]
    fn prop_spaced_calls_fire_individually(
        args in prop::collection::vec("[a-z]{1,8}", 1..8),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .start_paused(true)
            .build()
            .unwrap();

        let result = rt.block_on(async {
            let (calls, mut debouncer) = recording_debouncer(DELAY);
            for arg in &args {
                debouncer.call(arg.clone());
                sleep(DELAY + Duration::from_millis(50)).await;
            }
            recorded(&calls)
        });

        prop_assert_eq!(result, args);
    }
}
