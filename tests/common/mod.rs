//! Shared test fixtures.

#![allow(dead_code)]

use moviefeed::api::{MovieDto, TrendingPage};
use moviefeed::ui::movies::ListItem;

/// A list item without a poster, as the mapping produces for records
/// whose `poster_path` is null.
pub fn item(id: i64, title: &str) -> ListItem {
    ListItem {
        id,
        title: title.to_string(),
        poster: None,
    }
}

pub fn items() -> Vec<ListItem> {
    vec![item(1, "A"), item(2, "B")]
}

pub fn movie(id: i64, title: &str, poster_path: Option<&str>) -> MovieDto {
    MovieDto {
        id,
        title: title.to_string(),
        poster_path: poster_path.map(str::to_string),
    }
}

pub fn page(results: Vec<MovieDto>) -> TrendingPage {
    TrendingPage { results }
}
