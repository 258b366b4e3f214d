//! Integration tests for the admin session gate

use session_gate_core::{AuthStatus, GateConfig, MemoryStore, SessionGate, SessionStore};
use std::cell::RefCell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn stored_flag(gate: &SessionGate<MemoryStore>) -> Option<String> {
    gate.store()
        .get(GateConfig::STORAGE_KEY)
        .expect("memory store never fails")
}

#[test]
fn test_wrong_pairs_are_rejected_without_side_effects() {
    init_tracing();

    let attempts = [
        ("admin", "wrong"),
        ("wrong", "admin123"),
        ("", ""),
        ("ADMIN", "admin123"),
        ("admin", "ADMIN123"),
        ("admin", "admin123 "),
        ("admin\0", "admin123"),
    ];

    // From anonymous
    let gate = SessionGate::new(MemoryStore::new());
    for (username, password) in attempts {
        assert!(!gate.login(username, password), "{username:?}/{password:?}");
        assert!(!gate.is_authenticated());
        assert_eq!(stored_flag(&gate), None);
    }

    // From authenticated
    let gate = SessionGate::new(MemoryStore::new());
    assert!(gate.login("admin", "admin123"));
    for (username, password) in attempts {
        assert!(!gate.login(username, password));
        assert!(gate.is_authenticated());
        assert_eq!(stored_flag(&gate).as_deref(), Some("true"));
    }
}

#[test]
fn test_correct_pair_authenticates_and_persists() {
    init_tracing();

    let gate = SessionGate::new(MemoryStore::new());
    assert!(gate.login(GateConfig::ADMIN_USERNAME, GateConfig::ADMIN_PASSWORD));
    assert!(gate.is_authenticated());
    assert_eq!(stored_flag(&gate).as_deref(), Some("true"));
}

#[test]
fn test_logout_from_any_state() {
    init_tracing();

    let anonymous = SessionGate::new(MemoryStore::new());
    anonymous.logout();
    assert!(!anonymous.is_authenticated());
    assert_eq!(stored_flag(&anonymous), None);

    let authenticated = SessionGate::new(MemoryStore::new());
    authenticated.login("admin", "admin123");
    authenticated.logout();
    assert!(!authenticated.is_authenticated());
    assert_eq!(stored_flag(&authenticated), None);

    // A stale non-"true" value is cleared too
    let stale = SessionGate::new(MemoryStore::with_entry(GateConfig::STORAGE_KEY, "false"));
    stale.logout();
    assert_eq!(stored_flag(&stale), None);
}

#[test]
fn test_operations_are_idempotent() {
    init_tracing();

    let gate = SessionGate::new(MemoryStore::new());
    gate.logout();
    assert!(!gate.is_authenticated());
    gate.logout();
    assert!(!gate.is_authenticated());

    assert!(gate.login("admin", "admin123"));
    assert!(gate.is_authenticated());
    assert!(gate.login("admin", "admin123"));
    assert!(gate.is_authenticated());
    assert_eq!(gate.store().len(), 1);
}

#[test]
fn test_startup_restores_only_exact_true() {
    init_tracing();

    let restored = SessionGate::new(MemoryStore::with_entry(GateConfig::STORAGE_KEY, "true"));
    assert!(restored.is_authenticated());

    for value in ["false", "1", "yes", "True", "true\n", ""] {
        let gate = SessionGate::new(MemoryStore::with_entry(GateConfig::STORAGE_KEY, value));
        assert!(!gate.is_authenticated(), "stored {value:?} must not authenticate");
    }

    let other_key = SessionGate::new(MemoryStore::with_entry("authenticated", "true"));
    assert!(!other_key.is_authenticated());
}

#[test]
fn test_reload_round_trip() {
    init_tracing();

    // Same tab: the store outlives the gate across a reload
    let gate = SessionGate::new(MemoryStore::new());
    gate.login("admin", "admin123");
    let reloaded = SessionGate::new(gate.into_store());
    assert!(reloaded.is_authenticated());

    reloaded.logout();
    let reloaded_again = SessionGate::new(reloaded.into_store());
    assert!(!reloaded_again.is_authenticated());

    // New tab: fresh store
    let new_tab = SessionGate::new(MemoryStore::new());
    assert!(!new_tab.is_authenticated());
}

#[test]
fn test_admin_walkthrough() {
    init_tracing();

    let gate = SessionGate::new(MemoryStore::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    gate.subscribe(move |status| sink.borrow_mut().push(status));

    assert!(gate.login("admin", "admin123"));
    assert_eq!(gate.status(), AuthStatus::Authenticated);

    assert!(!gate.login("admin", "wrong"));
    assert_eq!(gate.status(), AuthStatus::Authenticated);

    gate.logout();
    assert_eq!(gate.status(), AuthStatus::Anonymous);
    assert_eq!(stored_flag(&gate), None);

    assert_eq!(
        *seen.borrow(),
        vec![
            AuthStatus::Anonymous,
            AuthStatus::Authenticated,
            AuthStatus::Anonymous
        ]
    );
}

#[test]
fn test_status_serialization() {
    assert_eq!(
        serde_json::to_string(&AuthStatus::Authenticated).unwrap(),
        "\"Authenticated\""
    );
    let parsed: AuthStatus = serde_json::from_str("\"Anonymous\"").unwrap();
    assert_eq!(parsed, AuthStatus::Anonymous);
}
