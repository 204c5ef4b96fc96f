use crate::ui::flow::Event;
use crate::ui::movies::item::ListItem;
use crate::ui::movies::state::LoadError;

/// Inputs to the movies-list state machine.
#[derive(Debug, Clone)]
pub enum MoviesListEvent {
    /// The screen became visible.
    Appear,
    /// The screen left the view hierarchy.
    Disappear,
    /// The user tapped a row. Accepted but currently unhandled; the
    /// detail screen is owned by the host application.
    SelectMovie(i64),
    /// The trending fetch succeeded.
    ItemsLoaded(Vec<ListItem>),
    /// The trending fetch failed.
    LoadFailed(LoadError),
}

impl Event for MoviesListEvent {}
