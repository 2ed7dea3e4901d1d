use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{Movie, SearchState};
use crate::services;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SetSearchTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub title: String,
    pub year: String,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchStateResponse {
    pub movies: Vec<MovieResponse>,
    pub loading_completed: bool,
}

impl From<SearchState> for SearchStateResponse {
    fn from(state: SearchState) -> Self {
        Self {
            movies: state.movies.into_iter().map(MovieResponse::from).collect(),
            loading_completed: state.loading_completed,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchMoviesParams {
    pub q: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Push a new search text into the debounce pipeline
///
/// The fetch happens later, once the text has been quiet for the debounce
/// window; observers pick up the results through the state endpoint.
pub async fn set_search_text(
    State(state): State<AppState>,
    Json(request): Json<SetSearchTextRequest>,
) -> StatusCode {
    state.controller.set_search_text(request.text);
    StatusCode::ACCEPTED
}

/// Snapshot of the observable search state
pub async fn get_search_state(State(state): State<AppState>) -> Json<SearchStateResponse> {
    Json(SearchStateResponse::from(state.controller.state()))
}

/// One-shot movie search, bypassing the debounce pipeline
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchMoviesParams>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    let movies = services::search_movies(state.provider.clone(), &params.q).await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}
