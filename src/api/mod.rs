//! Client for the remote movies API.

mod client;
mod dto;
mod error;

pub use client::MoviesClient;
pub use dto::{MovieDto, TrendingPage};
pub use error::ApiError;
