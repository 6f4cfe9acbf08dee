//! Progress survives a restart: a fresh store over the same directory
//! sees what the previous one wrote.

use eulerpad::core::progress::{ProgressState, ProgressStore};
use tempfile::tempdir;

#[test]
fn test_first_run_starts_at_problem_one() {
    let dir = tempdir().unwrap();
    let store = ProgressStore::new(dir.path().to_path_buf());
    assert_eq!(store.load().current_problem_id, 1);
}

#[test]
fn test_advance_persists_across_restart() {
    let dir = tempdir().unwrap();

    // First session: load, advance, persist.
    {
        let store = ProgressStore::new(dir.path().to_path_buf());
        let state = store.load();
        assert_eq!(state.current_problem_id, 1);
        store.save(&state.advanced()).unwrap();
    }

    // Simulated restart: a brand-new store over the same directory.
    let store = ProgressStore::new(dir.path().to_path_buf());
    assert_eq!(store.load().current_problem_id, 2);
}

#[test]
fn test_repeated_advances_are_monotonic() {
    let dir = tempdir().unwrap();
    let store = ProgressStore::new(dir.path().to_path_buf());

    let mut state = store.load();
    for _ in 0..5 {
        state = state.advanced();
        store.save(&state).unwrap();
    }

    assert_eq!(store.load().current_problem_id, 6);
}

#[test]
fn test_save_overwrites_previous_state() {
    let dir = tempdir().unwrap();
    let store = ProgressStore::new(dir.path().to_path_buf());

    store.save(&ProgressState::at(10)).unwrap();
    store.save(&ProgressState::at(11)).unwrap();
    assert_eq!(store.load().current_problem_id, 11);
}
