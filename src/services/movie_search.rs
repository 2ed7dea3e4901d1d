use crate::{error::AppResult, models::Movie, services::providers::MovieProvider};
use std::sync::Arc;

/// Service function for one-shot movie search
///
/// Delegates straight to the configured provider, bypassing the debounce
/// pipeline. Keeps HTTP routing separated from provider access.
pub async fn search_movies(
    provider: Arc<dyn MovieProvider>,
    query: &str,
) -> AppResult<Vec<Movie>> {
    provider.fetch_movies(query).await
}
