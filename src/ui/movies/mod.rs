//! The trending-movies list screen.

mod controller;
mod event;
mod feedback;
mod item;
mod reducer;
mod state;

pub use controller::MoviesListController;
pub use event::MoviesListEvent;
pub use feedback::LoadTrending;
pub use item::ListItem;
pub use reducer::MoviesListReducer;
pub use state::{LoadError, MoviesListState};
