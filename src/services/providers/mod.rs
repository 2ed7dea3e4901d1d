/// Movie data provider abstraction
///
/// Keeps the search pipeline decoupled from the concrete movie database
/// API so the controller can be exercised against a mocked provider.
use crate::{error::AppResult, models::Movie};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for movie search providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search the provider for movies matching a free-text query
    ///
    /// Transport and decode failures are absorbed at this boundary and
    /// reported as an empty result set; only a request that cannot be
    /// constructed at all surfaces as [`crate::error::AppError::BadRequest`].
    async fn fetch_movies(&self, query: &str) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
