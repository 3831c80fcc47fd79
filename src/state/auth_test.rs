use super::*;
use crate::util::storage::MemoryStorage;

fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{name}@example.com").to_lowercase(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        avatar_url: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_no_session() {
    let state = AuthState::default();
    assert!(state.current_user().is_none());
    assert!(state.token().is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Sign-in
// =============================================================

#[test]
fn sign_in_makes_user_current() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();
    let ann = user("u1", "Ann");

    state
        .sign_in(&storage, "abc123".to_owned(), ann.clone())
        .expect("valid sign-in");

    assert!(state.is_authenticated());
    assert_eq!(state.current_user(), Some(&ann));
    assert_eq!(state.token(), Some("abc123"));
}

#[test]
fn sign_in_writes_through_to_storage() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();

    state
        .sign_in(&storage, "abc123".to_owned(), user("u1", "Ann"))
        .expect("valid sign-in");

    assert_eq!(storage.get(crate::util::storage::TOKEN_KEY).as_deref(), Some("abc123"));
    let raw = storage.get(crate::util::storage::USER_KEY).expect("user persisted");
    let persisted: User = serde_json::from_str(&raw).expect("parsable user");
    assert_eq!(persisted.id, "u1");
}

#[test]
fn sign_in_rejects_empty_token() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();

    let result = state.sign_in(&storage, String::new(), user("u1", "Ann"));

    assert_eq!(result, Err(AuthError::EmptyToken));
    assert!(!state.is_authenticated());
    assert_eq!(storage.get(crate::util::storage::TOKEN_KEY), None);
}

#[test]
fn sign_in_rejects_user_without_id() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();

    let result = state.sign_in(&storage, "abc123".to_owned(), user("", "Ann"));

    assert_eq!(result, Err(AuthError::MissingUserId));
    assert!(!state.is_authenticated());
}

#[test]
fn sign_in_replaces_previous_session() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();

    state
        .sign_in(&storage, "t1".to_owned(), user("u1", "Ann"))
        .expect("first sign-in");
    state
        .sign_in(&storage, "t2".to_owned(), user("u2", "Bob"))
        .expect("second sign-in");

    assert_eq!(state.current_user().map(|u| u.id.as_str()), Some("u2"));
    assert_eq!(state.token(), Some("t2"));
}

// =============================================================
// Sign-out
// =============================================================

#[test]
fn sign_out_clears_session_and_storage() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();
    state
        .sign_in(&storage, "abc123".to_owned(), user("u1", "Ann"))
        .expect("valid sign-in");

    state.sign_out(&storage);

    assert!(!state.is_authenticated());
    assert!(state.current_user().is_none());
    assert_eq!(storage.get(crate::util::storage::TOKEN_KEY), None);
    assert_eq!(storage.get(crate::util::storage::USER_KEY), None);
}

#[test]
fn sign_out_without_session_is_noop() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();

    state.sign_out(&storage);

    assert!(!state.is_authenticated());
}

// =============================================================
// Initialize & persistence
// =============================================================

#[test]
fn initialize_with_empty_storage_yields_no_session() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();

    state.initialize(&storage);

    assert!(!state.is_authenticated());
}

#[test]
fn session_survives_simulated_restart() {
    let storage = MemoryStorage::default();
    let ann = user("u1", "Ann");

    let mut first = AuthState::default();
    first
        .sign_in(&storage, "abc123".to_owned(), ann.clone())
        .expect("valid sign-in");
    drop(first);

    // Restart: fresh state, same storage.
    let mut second = AuthState::default();
    second.initialize(&storage);

    assert!(second.is_authenticated());
    assert_eq!(second.current_user(), Some(&ann));
    assert_eq!(second.token(), Some("abc123"));
}

#[test]
fn initialize_is_idempotent() {
    let storage = MemoryStorage::default();
    storage.set(
        crate::util::storage::TOKEN_KEY,
        "abc123",
    );
    storage.set(
        crate::util::storage::USER_KEY,
        &serde_json::to_string(&user("u1", "Ann")).expect("serialize"),
    );

    let mut once = AuthState::default();
    once.initialize(&storage);

    let mut twice = once.clone();
    twice.initialize(&storage);

    assert_eq!(once, twice);
}

#[test]
fn second_initialize_does_not_reload_storage() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();
    state.initialize(&storage);

    // A write landing after the first initialize is not picked up; only
    // sign_in mutates an initialized store.
    storage.set(crate::util::storage::TOKEN_KEY, "late");
    state.initialize(&storage);

    assert!(!state.is_authenticated());
}

// =============================================================
// Corrupt-storage recovery
// =============================================================

#[test]
fn token_without_user_yields_no_session() {
    let storage = MemoryStorage::default();
    storage.set(crate::util::storage::TOKEN_KEY, "abc123");

    let mut state = AuthState::default();
    state.initialize(&storage);

    assert!(!state.is_authenticated());
}

#[test]
fn unparsable_user_yields_no_session() {
    let storage = MemoryStorage::default();
    storage.set(crate::util::storage::TOKEN_KEY, "abc123");
    storage.set(crate::util::storage::USER_KEY, "{not json");

    let mut state = AuthState::default();
    state.initialize(&storage);

    assert!(!state.is_authenticated());
}

#[test]
fn user_without_id_yields_no_session() {
    let storage = MemoryStorage::default();
    storage.set(crate::util::storage::TOKEN_KEY, "abc123");
    storage.set(crate::util::storage::USER_KEY, r#"{"id":"","name":"Ann"}"#);

    let mut state = AuthState::default();
    state.initialize(&storage);

    assert!(!state.is_authenticated());
}

#[test]
fn empty_token_yields_no_session() {
    let storage = MemoryStorage::default();
    storage.set(crate::util::storage::TOKEN_KEY, "");
    storage.set(
        crate::util::storage::USER_KEY,
        &serde_json::to_string(&user("u1", "Ann")).expect("serialize"),
    );

    let mut state = AuthState::default();
    state.initialize(&storage);

    assert!(!state.is_authenticated());
}

#[test]
fn corrupt_keys_are_left_in_place() {
    let storage = MemoryStorage::default();
    storage.set(crate::util::storage::TOKEN_KEY, "abc123");
    storage.set(crate::util::storage::USER_KEY, "{not json");

    let mut state = AuthState::default();
    state.initialize(&storage);

    // Storage is cleared only by explicit sign-out.
    assert_eq!(storage.get(crate::util::storage::USER_KEY).as_deref(), Some("{not json"));
}

// =============================================================
// Named scenario
// =============================================================

#[test]
fn ann_signs_in_and_out() {
    let storage = MemoryStorage::default();
    let mut state = AuthState::default();

    state
        .sign_in(&storage, "abc123".to_owned(), user("u1", "Ann"))
        .expect("valid sign-in");
    assert_eq!(state.current_user().map(|u| u.name.as_str()), Some("Ann"));

    state.sign_out(&storage);
    assert_eq!(state.current_user(), None);
}
