use std::sync::Arc;
use std::time::Duration;

use marquee_api::{
    api::{create_router, AppState},
    config::Config,
    services::{providers::MovieProvider, providers::OmdbProvider, SearchController},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("marquee_api=debug,tower_http=info")),
        )
        .init();

    // Load configuration and wire up the search pipeline
    let config = Config::from_env()?;

    let provider: Arc<dyn MovieProvider> = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));
    let controller = SearchController::new(
        provider.clone(),
        Duration::from_millis(config.search_debounce_ms),
    );

    // Log completed result updates the way a screen re-renders on them
    let mut updates = controller.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            if state.loading_completed {
                tracing::info!(results = state.movies.len(), "Search results updated");
            }
        }
    });

    let state = AppState::new(controller, provider);
    let app = create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    tracing::info!(host = %config.host, port = config.port, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
