mod common;

use moviefeed::ui::flow::Reducer;
use moviefeed::ui::movies::{LoadError, MoviesListEvent, MoviesListReducer, MoviesListState};

fn failure() -> LoadError {
    LoadError::new("network down")
}

/// Every event with no transition in the table, for identity checks.
fn unmatched_for_idle() -> Vec<MoviesListEvent> {
    vec![
        MoviesListEvent::Disappear,
        MoviesListEvent::SelectMovie(7),
        MoviesListEvent::ItemsLoaded(common::items()),
        MoviesListEvent::LoadFailed(failure()),
    ]
}

fn all_events() -> Vec<MoviesListEvent> {
    vec![
        MoviesListEvent::Appear,
        MoviesListEvent::Disappear,
        MoviesListEvent::SelectMovie(7),
        MoviesListEvent::ItemsLoaded(common::items()),
        MoviesListEvent::LoadFailed(failure()),
    ]
}

#[test]
fn idle_appear_starts_loading() {
    let state = MoviesListReducer::reduce(MoviesListState::Idle, MoviesListEvent::Appear);
    assert_eq!(state, MoviesListState::Loading);
}

#[test]
fn idle_ignores_unmatched_events() {
    for event in unmatched_for_idle() {
        let state = MoviesListReducer::reduce(MoviesListState::Idle, event);
        assert_eq!(state, MoviesListState::Idle);
    }
}

#[test]
fn loading_items_loaded_transitions_to_loaded() {
    let state = MoviesListReducer::reduce(
        MoviesListState::Loading,
        MoviesListEvent::ItemsLoaded(common::items()),
    );
    assert_eq!(state, MoviesListState::Loaded(common::items()));
}

#[test]
fn loading_accepts_empty_list() {
    let state = MoviesListReducer::reduce(
        MoviesListState::Loading,
        MoviesListEvent::ItemsLoaded(Vec::new()),
    );
    assert_eq!(state, MoviesListState::Loaded(Vec::new()));
}

#[test]
fn loading_failure_transitions_to_error() {
    let state = MoviesListReducer::reduce(
        MoviesListState::Loading,
        MoviesListEvent::LoadFailed(failure()),
    );
    assert_eq!(state, MoviesListState::Error(failure()));
}

#[test]
fn loading_ignores_appear_and_selection() {
    for event in [
        MoviesListEvent::Appear,
        MoviesListEvent::Disappear,
        MoviesListEvent::SelectMovie(1),
    ] {
        let state = MoviesListReducer::reduce(MoviesListState::Loading, event);
        assert_eq!(state, MoviesListState::Loading);
    }
}

#[test]
fn loaded_ignores_every_event() {
    let loaded = MoviesListState::Loaded(common::items());
    for event in all_events() {
        let state = MoviesListReducer::reduce(loaded.clone(), event);
        assert_eq!(state, loaded);
    }
}

#[test]
fn error_ignores_every_event() {
    let errored = MoviesListState::Error(failure());
    for event in all_events() {
        let state = MoviesListReducer::reduce(errored.clone(), event);
        assert_eq!(state, errored);
    }
}
