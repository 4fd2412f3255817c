//! Tests for the Forge tracing setup.

use std::sync::Mutex;

use forge_core::tracing::setup::{init_tracing, log_filter, LOG_ENV_VAR};

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_forge_log_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "this_is_garbage=not_a_level");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_per_subsystem_filtering() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "forge_transform=debug");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);

    let filter = log_filter(Some("forge_transform=debug,forge_registry=warn")).to_string();
    assert!(filter.contains("forge_transform=debug"));
    assert!(filter.contains("forge_registry=warn"));
}

#[test]
fn test_filter_defaults() {
    assert_eq!(log_filter(None).to_string(), "forge=info");
    assert_eq!(log_filter(Some("this_is_garbage=not_a_level")).to_string(), "forge=info");
}
