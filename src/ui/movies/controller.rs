use std::future::Future;

use tokio::sync::watch;

use crate::api::{MoviesClient, TrendingPage};
use crate::ui::flow::{Feedback, Store};
use crate::ui::movies::event::MoviesListEvent;
use crate::ui::movies::feedback::LoadTrending;
use crate::ui::movies::reducer::MoviesListReducer;
use crate::ui::movies::state::{LoadError, MoviesListState};

/// Controller for one instance of the movies-list screen.
///
/// Created when the screen is instantiated; dropping it tears down the
/// event loop and cancels any in-flight fetch. State starts at
/// [`MoviesListState::Idle`] and is driven solely by events.
pub struct MoviesListController {
    store: Store<MoviesListReducer>,
}

impl MoviesListController {
    /// Wire the screen against the production API client.
    pub fn new(client: MoviesClient) -> Self {
        Self::with_fetch(move || {
            let client = client.clone();
            async move { client.trending().await.map_err(LoadError::from) }
        })
    }

    /// Wire the screen against an arbitrary fetch function.
    pub fn with_fetch<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<TrendingPage, LoadError>> + Send + 'static,
    {
        let feedbacks: Vec<Box<dyn Feedback<MoviesListState, MoviesListEvent>>> =
            vec![Box::new(LoadTrending::new(fetch))];
        Self {
            store: Store::new(feedbacks),
        }
    }

    /// Submit a user-interaction event. Non-blocking.
    pub fn send(&self, event: MoviesListEvent) {
        self.store.send(event);
    }

    /// Snapshot of the current screen state.
    pub fn state(&self) -> MoviesListState {
        self.store.state()
    }

    /// Observe state changes; the view layer renders from this.
    pub fn subscribe(&self) -> watch::Receiver<MoviesListState> {
        self.store.subscribe()
    }
}
