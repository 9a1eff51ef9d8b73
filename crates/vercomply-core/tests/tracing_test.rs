//! Tests for the vercomply tracing setup.

use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use vercomply_core::tracing::setup::{init_tracing, log_filter, LOG_ENV_VAR};

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

/// T0-TRC-01: VERCOMPLY_LOG directives drive the resolved filter.
#[test]
fn test_log_filter_from_env() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "vercomply_analysis=debug,vercomply_core=warn");
    let filter = log_filter();
    std::env::remove_var(LOG_ENV_VAR);

    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
}

/// T0-TRC-02: init_tracing() called repeatedly installs one global subscriber.
#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
    tracing::info!("tracing initialised");
}

/// T0-TRC-03: Unset or unparseable directives resolve to the default filter.
#[test]
fn test_invalid_filter_fallback() {
    let _lock = TRACING_MUTEX.lock().unwrap();

    std::env::remove_var(LOG_ENV_VAR);
    let unset = log_filter();
    assert_eq!(unset.max_level_hint(), Some(LevelFilter::INFO));

    std::env::set_var(LOG_ENV_VAR, "vercomply_analysis=trace,vercomply=not-a-level");
    let invalid = log_filter();
    std::env::remove_var(LOG_ENV_VAR);
    assert_eq!(invalid.max_level_hint(), Some(LevelFilter::INFO));
}
