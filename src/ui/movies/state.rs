use thiserror::Error;

use crate::api::ApiError;
use crate::ui::flow::State;
use crate::ui::movies::item::ListItem;

/// Screen state for the movies list.
///
/// Exactly one case is active at a time. There is no transition back
/// out of `Loaded` or `Error`; a fresh controller is the only reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MoviesListState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ListItem>),
    Error(LoadError),
}

impl State for MoviesListState {}

impl MoviesListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Opaque failure carried by [`MoviesListState::Error`].
///
/// The screen does not distinguish error kinds; whatever the fetch
/// reports is captured as a single displayable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApiError> for LoadError {
    fn from(error: ApiError) -> Self {
        Self::new(error.to_string())
    }
}
