use chrono::NaiveDate;
use nexushr_core::db::{open_db, open_db_in_memory};
use nexushr_core::{
    AppState, Event, HrService, LeaveStatus, SqliteStateStore, StateStore, STORAGE_KEY,
};
use rusqlite::params;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn first_load_returns_seed_and_persists_it_immediately() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::with_seed_date(&conn, fixed_today());

    let state = store.load();
    assert_eq!(state, AppState::seed(fixed_today()));
    assert_eq!(state.employees.len(), 4);
    assert_eq!(state.departments.len(), 3);
    assert!(state.payroll.is_empty());

    // The seed was written, so a second load reads it back from the blob.
    let payload = store.raw_payload().unwrap();
    assert!(payload.is_some());
    assert_eq!(store.load(), state);
}

#[test]
fn save_load_round_trip_is_byte_identical() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::with_seed_date(&conn, fixed_today());

    let state = store.load();
    store.save(&state).unwrap();
    let first = store.raw_payload().unwrap().unwrap();

    let reloaded = store.load();
    store.save(&reloaded).unwrap();
    let second = store.raw_payload().unwrap().unwrap();

    assert_eq!(first, second);
}

#[test]
fn corrupt_payload_degrades_to_seed_without_overwriting_the_blob() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::with_seed_date(&conn, fixed_today());

    conn.execute(
        "INSERT INTO app_state (key, payload) VALUES (?1, ?2);",
        params![STORAGE_KEY, "{not json"],
    )
    .unwrap();

    let state = store.load();
    assert_eq!(state, AppState::seed(fixed_today()));

    // The broken blob is left in place for inspection.
    assert_eq!(store.raw_payload().unwrap().as_deref(), Some("{not json"));
}

#[test]
fn state_survives_across_connections_to_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nexushr.db");

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteStateStore::with_seed_date(&conn, fixed_today());
        let mut service = HrService::load(store);
        service.dispatch(Event::UpdateLeaveStatus {
            id: "l1".to_string(),
            status: LeaveStatus::Rejected,
        });
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteStateStore::with_seed_date(&conn, fixed_today());
    let state = store.load();
    assert_eq!(state.leaves[0].status, LeaveStatus::Rejected);
}

#[test]
fn failed_save_is_swallowed_and_the_mutation_survives_in_memory() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::with_seed_date(&conn, fixed_today());
    let mut service = HrService::load(store);

    // Break persistence out from under the running session.
    conn.execute_batch("DROP TABLE app_state;").unwrap();

    let before = service.state().employees.len();
    service.dispatch(Event::DeleteEmployee("e4".to_string()));

    // The save failed silently; the in-memory aggregate still moved on.
    assert_eq!(service.state().employees.len(), before - 1);
    assert!(service.state().employee("e4").is_none());
}

#[test]
fn dispatch_updates_memory_and_persists_the_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::with_seed_date(&conn, fixed_today());
    let mut service = HrService::load(store);

    let before = service.state().employees.len();
    service.dispatch(Event::DeleteEmployee("e4".to_string()));
    assert_eq!(service.state().employees.len(), before - 1);

    let store = SqliteStateStore::with_seed_date(&conn, fixed_today());
    let persisted = store.load();
    assert!(persisted.employee("e4").is_none());
    assert_eq!(persisted.employees.len(), before - 1);
}
