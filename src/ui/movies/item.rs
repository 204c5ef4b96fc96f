use reqwest::Url;

use crate::api::MovieDto;

/// UI-facing projection of a remote movie record.
///
/// Built once from the API payload when a page loads; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Remote movie id, unique within a loaded list.
    pub id: i64,
    pub title: String,
    pub poster: Option<Url>,
}

impl From<MovieDto> for ListItem {
    fn from(movie: MovieDto) -> Self {
        let poster = movie.poster();
        Self {
            id: movie.id,
            title: movie.title,
            poster,
        }
    }
}
