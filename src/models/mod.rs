use serde::{Deserialize, Serialize};

/// A single movie record shown to observers of the search pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: String,
}

/// Observable state owned by the search controller
///
/// `movies` holds the result of the most recent fetch whose sequence number
/// is the highest applied so far. `loading_completed` is cleared when a fetch
/// is issued and set again when one completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub movies: Vec<Movie>,
    pub loading_completed: bool,
}

// ============================================================================
// OMDB API Types
// ============================================================================

/// Raw search response document from the OMDB API
///
/// OMDB omits the `Search` field entirely on "no results" and error
/// responses, so its absence decodes as an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbMovie>,
}

/// One entry of the OMDB `Search` array
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
}

impl From<OmdbMovie> for Movie {
    fn from(movie: OmdbMovie) -> Self {
        Movie {
            title: movie.title,
            year: movie.year,
        }
    }
}
