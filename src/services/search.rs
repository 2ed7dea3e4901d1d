/// Debounced movie search pipeline
///
/// `SearchController` owns the observable `{movies, loading_completed}` state
/// and the keystroke-to-fetch pipeline: rapid text changes are debounced over
/// a quiescence window, the stabilized text is handed to the provider, and
/// completed results are applied under a monotonic sequence gate so that a
/// superseded fetch can never overwrite newer data.
use crate::{
    error::AppResult,
    models::{Movie, SearchState},
    services::providers::MovieProvider,
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;
use tokio::sync::{watch, Mutex};

/// Owns the debounce pipeline and publishes search state to observers
#[derive(Clone)]
pub struct SearchController {
    inner: Arc<Inner>,
}

struct Inner {
    provider: Arc<dyn MovieProvider>,
    debounce: Duration,
    state_tx: watch::Sender<SearchState>,
    /// Bumped on every keystroke; a debounce timer only fires for the
    /// generation it was armed with, so re-arming cancels the old timer.
    generation: AtomicU64,
    /// Sequence number assigned to each fetch at issue time
    issued: AtomicU64,
    /// Highest sequence number whose result has been applied
    applied: AtomicU64,
    /// At most one fetch is logically in flight at a time
    fetch_gate: Mutex<()>,
}

impl SearchController {
    pub fn new(provider: Arc<dyn MovieProvider>, debounce: Duration) -> Self {
        let (state_tx, _) = watch::channel(SearchState::default());

        Self {
            inner: Arc::new(Inner {
                provider,
                debounce,
                state_tx,
                generation: AtomicU64::new(0),
                issued: AtomicU64::new(0),
                applied: AtomicU64::new(0),
                fetch_gate: Mutex::new(()),
            }),
        }
    }

    /// Pushes a new search text into the pipeline
    ///
    /// Restarts the debounce window; only text that survives the window
    /// without being superseded triggers a fetch.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::spawn(Arc::clone(&self.inner).debounce_cycle(generation, text.into()));
    }

    /// Snapshot of the current observable state
    pub fn state(&self) -> SearchState {
        self.inner.state_tx.borrow().clone()
    }

    /// Subscribes to whole-state change notifications
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state_tx.subscribe()
    }
}

impl Inner {
    async fn debounce_cycle(self: Arc<Self>, generation: u64, text: String) {
        tokio::time::sleep(self.debounce).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer keystroke re-armed the window; this timer is dead.
            return;
        }

        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(query = %text, seq, "Search text stabilized, issuing fetch");

        let _serial = self.fetch_gate.lock().await;

        // New fetch cycle: clear the completion flag but keep the previous
        // results visible until fresh ones land.
        self.state_tx
            .send_modify(|state| state.loading_completed = false);

        let outcome = self.provider.fetch_movies(&text).await;
        self.apply(seq, &text, outcome);
    }

    /// Applies a completed fetch under the sequence gate
    fn apply(&self, seq: u64, query: &str, outcome: AppResult<Vec<Movie>>) {
        match outcome {
            Ok(movies) => {
                let results = movies.len();
                let newest = self.applied.fetch_max(seq, Ordering::SeqCst) < seq;

                self.state_tx.send_modify(|state| {
                    if newest {
                        state.movies = movies;
                    }
                    state.loading_completed = true;
                });

                if newest {
                    tracing::info!(
                        query = %query,
                        seq,
                        results,
                        provider = self.provider.name(),
                        "Search results applied"
                    );
                } else {
                    tracing::debug!(query = %query, seq, "Discarded result of superseded fetch");
                }
            }
            Err(e) => {
                // Only pre-flight request construction failures land here;
                // the previous results stay in place.
                tracing::warn!(query = %query, error = %e, "Search fetch was not issued");
            }
        }
    }
}
