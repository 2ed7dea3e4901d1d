use std::sync::Arc;

use crate::services::{providers::MovieProvider, SearchController};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Debounced search pipeline and observable result state
    pub controller: SearchController,
    /// Provider handle for one-shot searches outside the pipeline
    pub provider: Arc<dyn MovieProvider>,
}

impl AppState {
    pub fn new(controller: SearchController, provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            controller,
            provider,
        }
    }
}
