/// OMDB API provider
///
/// Translates a free-text search string into a GET request against
/// `https://www.omdbapi.com/?s={query}&page={page}&apiKey={key}` and decodes
/// the `Search` array of the response document.
///
/// Failure handling is lopsided: a request that cannot be constructed fails
/// before any network activity, while everything after the request is issued
/// (transport errors, non-2xx statuses, undecodable bodies) collapses into an
/// empty result list. Callers cannot distinguish "no results" from "request
/// failed"; the distinction only exists in logs.
use crate::{
    error::{AppError, AppResult},
    models::{Movie, OmdbSearchResponse},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;
use url::Url;

/// Fixed result page requested from OMDB
const RESULT_PAGE: u32 = 2;

#[derive(Debug, Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Builds the search URL, percent-encoding the query into the `s`
    /// parameter
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] when the query cannot be encoded
    /// into a valid request, before any network call is made.
    fn build_search_url(&self, query: &str) -> AppResult<Url> {
        // Control characters count as unencodable input
        if query.chars().any(char::is_control) {
            return Err(AppError::BadRequest(
                "search text contains unencodable characters".to_string(),
            ));
        }

        let mut url = Url::parse(&self.api_url)
            .map_err(|e| AppError::BadRequest(format!("invalid OMDB base URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("s", query)
            .append_pair("page", &RESULT_PAGE.to_string())
            .append_pair("apiKey", &self.api_key);

        Ok(url)
    }

    async fn request_movies(&self, url: Url) -> AppResult<Vec<Movie>> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDB API returned status {}: {}",
                status, body
            )));
        }

        let decoded: OmdbSearchResponse = response.json().await?;

        Ok(decoded.search.into_iter().map(Movie::from).collect())
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn fetch_movies(&self, query: &str) -> AppResult<Vec<Movie>> {
        // Pre-flight encoding failure is the only error the caller ever sees
        let url = self.build_search_url(query)?;

        tracing::debug!(url = %url, "Issuing OMDB search request");

        match self.request_movies(url).await {
            Ok(movies) => {
                tracing::info!(
                    query = %query,
                    results = movies.len(),
                    provider = "omdb",
                    "Movie search completed"
                );
                Ok(movies)
            }
            Err(e) => {
                tracing::warn!(
                    query = %query,
                    error = %e,
                    provider = "omdb",
                    "Movie search failed, reporting no results"
                );
                Ok(Vec::new())
            }
        }
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
