use std::future::Future;

use tokio::task::JoinHandle;

use crate::api::TrendingPage;
use crate::ui::flow::{EventSink, Feedback};
use crate::ui::movies::event::MoviesListEvent;
use crate::ui::movies::item::ListItem;
use crate::ui::movies::state::{LoadError, MoviesListState};

/// Fetch-on-loading feedback.
///
/// Each entry into [`MoviesListState::Loading`] starts exactly one
/// fetch; staying in `Loading` starts nothing. A re-entry aborts any
/// still-running fetch before issuing the next, so at most one outcome
/// event reaches the reducer per entry.
pub struct LoadTrending<F> {
    fetch: F,
    in_flight: Option<JoinHandle<()>>,
}

impl<F, Fut> LoadTrending<F>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<TrendingPage, LoadError>> + Send + 'static,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            in_flight: None,
        }
    }
}

impl<F, Fut> Feedback<MoviesListState, MoviesListEvent> for LoadTrending<F>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<TrendingPage, LoadError>> + Send + 'static,
{
    fn on_transition(&mut self, state: &MoviesListState, events: &EventSink<MoviesListEvent>) {
        if !state.is_loading() {
            return;
        }
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        tracing::debug!("fetching trending movies");
        let fetch = (self.fetch)();
        let events = events.clone();
        self.in_flight = Some(tokio::spawn(async move {
            match fetch.await {
                Ok(page) => {
                    let items: Vec<ListItem> =
                        page.results.into_iter().map(ListItem::from).collect();
                    tracing::debug!(count = items.len(), "trending fetch succeeded");
                    events.send(MoviesListEvent::ItemsLoaded(items));
                }
                Err(error) => {
                    tracing::warn!(%error, "trending fetch failed");
                    events.send(MoviesListEvent::LoadFailed(error));
                }
            }
        }));
    }
}

impl<F> Drop for LoadTrending<F> {
    fn drop(&mut self) {
        // An in-flight fetch must not outlive its screen.
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
    }
}
