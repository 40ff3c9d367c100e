// Integration tests for begbot.
//
// These tests exercise the crate end-to-end through its public API: config
// loading, snapshot parsing, the valuation aggregator, and the navigation
// and loading state machines working against realistic data.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use begbot::config::load_config_from;
use begbot::loading::LoadingTracker;
use begbot::model::Snapshot;
use begbot::nav::ListNavigator;
use begbot::observable::Observed;
use begbot::valuation::compute_weighted_valuation;

// ===========================================================================
// Test helpers
// ===========================================================================

/// Fixture directory path (relative to the crate root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn load_snapshot() -> Snapshot {
    let text = std::fs::read_to_string(Path::new(FIXTURES).join("snapshot.json"))
        .expect("fixture snapshot should exist");
    serde_json::from_str(&text).expect("fixture snapshot should parse")
}

// ===========================================================================
// Config + snapshot + aggregation
// ===========================================================================

#[test]
fn default_config_loads_and_validates() {
    let config = load_config_from(Path::new("defaults/begbot.toml"))
        .expect("shipped default config must be valid");
    assert_eq!(config.enabled_types, vec![1, 2, 3]);
    assert_eq!(config.weights.get(&3), Some(&0.5));
    assert_eq!(config.spinner_delay, Duration::from_millis(200));
}

#[test]
fn aggregates_snapshot_with_default_config() {
    let config = load_config_from(Path::new("defaults/begbot.toml")).unwrap();
    let snapshot = load_snapshot();
    let configs = snapshot.configs_by_product();

    // Product 1: two equal-weight sources {1000, 2000}.
    let p1 = compute_weighted_valuation(
        1,
        &config.enabled_types,
        &snapshot.valuations,
        &config.weights,
        &configs,
    )
    .expect("product 1 has two sources");
    assert_eq!(p1.average, 1500);
    // mean 1500, stdev 500 -> 100 - 33.3 rounds to 67.
    assert_eq!(p1.safety_percent, 67);

    // Product 2: type 2 deactivated by override, only {1000} remains.
    let p2 = compute_weighted_valuation(
        2,
        &config.enabled_types,
        &snapshot.valuations,
        &config.weights,
        &configs,
    )
    .expect("product 2 still has one active source");
    assert_eq!(p2.average, 1000);
    assert_eq!(p2.safety_percent, 100);

    // Product 3: no observed entries at all.
    let p3 = compute_weighted_valuation(
        3,
        &config.enabled_types,
        &snapshot.valuations,
        &config.weights,
        &configs,
    );
    assert!(p3.is_none());
}

// ===========================================================================
// Navigator driving an observable selection
// ===========================================================================

#[test]
fn navigator_selection_flows_into_observable_state() {
    // The view mirrors the navigator's selection into an observable the
    // rest of the UI subscribes to.
    let snapshot = load_snapshot();

    let selection: Rc<RefCell<Observed<Option<usize>>>> =
        Rc::new(RefCell::new(Observed::new(None)));
    let highlight_log = Rc::new(RefCell::new(Vec::new()));

    let log_clone = Rc::clone(&highlight_log);
    selection
        .borrow_mut()
        .subscribe(move |idx| log_clone.borrow_mut().push(*idx));

    let mut nav = ListNavigator::new(snapshot.products.len());
    let selection_clone = Rc::clone(&selection);
    nav.on_change(move |idx| selection_clone.borrow_mut().set(idx));

    nav.set_focused(true);
    nav.move_down();
    nav.move_down();
    nav.clear_selection();

    assert_eq!(*highlight_log.borrow(), vec![Some(0), Some(1), None]);
    assert_eq!(*selection.borrow().get(), None);
}

#[test]
fn navigator_survives_list_refresh() {
    // A re-fetch can shrink the product list under the cursor.
    let mut nav = ListNavigator::new(10);
    nav.set_focused(true);
    for _ in 0..10 {
        nav.move_down();
    }
    assert_eq!(nav.selected_index(), Some(9));

    nav.set_item_count(3);
    assert_eq!(nav.selected_index(), Some(2));

    nav.set_item_count(0);
    assert_eq!(nav.selected_index(), None);

    // A later refill starts from a clean cursor.
    nav.set_item_count(5);
    nav.move_up();
    assert_eq!(nav.selected_index(), Some(4));
}

// ===========================================================================
// Loading indicator with configured delay
// ===========================================================================

#[test]
fn loading_tracker_uses_configured_spinner_delay() {
    let config = load_config_from(Path::new("defaults/begbot.toml")).unwrap();
    let mut tracker = LoadingTracker::new(config.spinner_delay);

    let t0 = Instant::now();
    tracker.request_started(t0);
    tracker.request_started(t0 + Duration::from_millis(50));

    // Still inside the debounce window.
    assert!(!tracker.is_visible(t0 + Duration::from_millis(100)));
    // Past the window with requests outstanding.
    assert!(tracker.is_visible(t0 + config.spinner_delay));

    tracker.request_finished();
    assert!(tracker.is_visible(t0 + Duration::from_millis(500)));
    tracker.request_finished();
    assert!(!tracker.is_visible(t0 + Duration::from_millis(500)));
}
