use crate::ui::flow::Reducer;
use crate::ui::movies::event::MoviesListEvent;
use crate::ui::movies::state::MoviesListState;

pub struct MoviesListReducer;

impl Reducer for MoviesListReducer {
    type State = MoviesListState;
    type Event = MoviesListEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match state {
            MoviesListState::Idle => match event {
                MoviesListEvent::Appear => MoviesListState::Loading,
                _ => state,
            },
            MoviesListState::Loading => match event {
                MoviesListEvent::ItemsLoaded(items) => MoviesListState::Loaded(items),
                MoviesListEvent::LoadFailed(error) => MoviesListState::Error(error),
                _ => state,
            },
            // TODO: route SelectMovie to a detail screen once the host
            // app exposes navigation.
            MoviesListState::Loaded(_) => state,
            MoviesListState::Error(_) => state,
        }
    }
}
