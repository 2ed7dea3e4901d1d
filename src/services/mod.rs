pub mod movie_search;
pub mod providers;
pub mod search;

pub use movie_search::search_movies;
pub use search::SearchController;
