use reqwest::Client;

use crate::api::dto::TrendingPage;
use crate::api::error::ApiError;
use crate::config::ApiConfig;

/// Thin HTTP client for the movies API.
///
/// Cheap to clone; clones share the underlying connection pool. No
/// request timeout is applied: the screen has no timeout policy, a
/// stalled fetch simply keeps the screen in its loading state.
#[derive(Clone)]
pub struct MoviesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MoviesClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch this week's trending movies.
    pub async fn trending(&self) -> Result<TrendingPage, ApiError> {
        let url = format!("{}/trending/movie/week", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { source })
    }
}
