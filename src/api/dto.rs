use reqwest::Url;
use serde::Deserialize;

/// Base URL for poster images; the API only returns a relative path.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w154";

/// One page of trending results as returned by the API.
///
/// Unknown fields (`page`, `total_results`, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingPage {
    pub results: Vec<MovieDto>,
}

/// Raw movie record from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
}

impl MovieDto {
    /// Full poster URL, when the record carries a poster path.
    pub fn poster(&self) -> Option<Url> {
        let path = self.poster_path.as_deref()?;
        Url::parse(&format!("{}{}", IMAGE_BASE_URL, path)).ok()
    }
}
