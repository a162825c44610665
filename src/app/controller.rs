//! Fetch-and-render controller.
//!
//! Requests run on tokio tasks and report back over a channel. The event loop
//! feeds every [`FetchUpdate`] into [`FetchController::apply`], which is the
//! only code path that writes fetch results into [`AppState`]. Each request
//! kind carries a monotonically increasing generation: an update whose
//! generation is not the newest issued for its kind is dropped, so rapid
//! repeated searches always end on the last one the user asked for.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::command::Command;
use super::state::{ActiveView, AppState, SearchState};
use crate::core::client::DictionaryClient;
use crate::core::error::{FetchError, SearchError};
use crate::core::model::{RandomWordSummary, WordDetail};

/// Outcome of one request, tagged with the generation it was issued under.
#[derive(Debug)]
pub enum FetchUpdate {
    RandomWord {
        generation: u64,
        result: Result<WordDetail, FetchError>,
    },
    WordDetails {
        generation: u64,
        word: String,
        result: Result<WordDetail, FetchError>,
    },
}

/// Bookkeeping for one request kind.
#[derive(Default)]
struct RequestSlot {
    generation: u64,
    pending: bool,
    cancel: Option<CancellationToken>,
}

impl RequestSlot {
    /// Start a new generation, cancelling the one it supersedes.
    fn issue(&mut self, scope: &CancellationToken) -> (u64, CancellationToken) {
        if let Some(prev) = self.cancel.take() {
            prev.cancel();
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        let token = scope.child_token();
        self.cancel = Some(token.clone());
        (self.generation, token)
    }

    /// Mark `generation` as finished. Returns `false` for stale updates.
    fn settle(&mut self, generation: u64) -> bool {
        if !self.pending || generation != self.generation {
            return false;
        }
        self.pending = false;
        self.cancel = None;
        true
    }
}

pub struct FetchController {
    client: Arc<dyn DictionaryClient>,
    tx: mpsc::UnboundedSender<FetchUpdate>,
    /// Parent of every request token; cancelled on teardown.
    scope: CancellationToken,
    random: RequestSlot,
    search: RequestSlot,
}

impl FetchController {
    /// Create a controller and the receiver the event loop should poll.
    pub fn new(client: Arc<dyn DictionaryClient>) -> (Self, mpsc::UnboundedReceiver<FetchUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            client,
            tx,
            scope: CancellationToken::new(),
            random: RequestSlot::default(),
            search: RequestSlot::default(),
        };
        (controller, rx)
    }

    /// `true` while the newest request of either kind is in flight.
    pub fn is_loading(&self) -> bool {
        self.random.pending || self.search.pending
    }

    /// Ask for a new word of the day.
    pub fn load_random_word(&mut self, state: &mut AppState) {
        let (generation, token) = self.random.issue(&self.scope);
        state.loading = true;
        debug!(generation, "fetching random word");

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(generation, "random word request cancelled");
                }
                result = client.fetch_random_word() => {
                    // Receiver gone means the screen is gone; nothing to do.
                    let _ = tx.send(FetchUpdate::RandomWord { generation, result });
                }
            }
        });
    }

    /// Look up `word`. Blank or absent input is rejected without a request.
    pub fn search_word(
        &mut self,
        state: &mut AppState,
        word: Option<&str>,
    ) -> Result<(), SearchError> {
        let word = word
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or(SearchError::MissingWord)?
            .to_owned();

        let (generation, token) = self.search.issue(&self.scope);
        state.loading = true;
        debug!(generation, %word, "searching");

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(generation, %word, "search cancelled");
                }
                result = client.fetch_word_with_details(&word) => {
                    let _ = tx.send(FetchUpdate::WordDetails { generation, word, result });
                }
            }
        });
        Ok(())
    }

    /// Fold a request outcome into the UI state.
    pub fn apply(&mut self, state: &mut AppState, update: FetchUpdate) {
        match update {
            FetchUpdate::RandomWord { generation, result } => {
                if !self.random.settle(generation) {
                    debug!(generation, latest = self.random.generation, "dropping stale random word");
                    return;
                }
                match result {
                    Ok(detail) => {
                        info!(word = %detail.word, "word of the day");
                        state.summary = Some(RandomWordSummary::from_detail(&detail));
                    }
                    Err(err) => warn!(error = %err, "failed to fetch random word"),
                }
            }
            FetchUpdate::WordDetails {
                generation,
                word,
                result,
            } => {
                if !self.search.settle(generation) {
                    debug!(generation, latest = self.search.generation, %word, "dropping stale search");
                    return;
                }
                match result {
                    Ok(detail) => {
                        let selected_word = detail.word.clone();
                        let results = detail.into_defined_results();
                        debug!(word = %selected_word, count = results.len(), "search results");
                        state.search = SearchState {
                            selected_word: Some(selected_word),
                            results: Some(results),
                        };
                        state.grid.reset();
                        state.details_scroll = 0;
                        if state.active_view == ActiveView::Details {
                            state.active_view = ActiveView::Home;
                        }
                    }
                    Err(err) => warn!(error = %err, %word, "failed to fetch word details"),
                }
            }
        }
        state.loading = self.is_loading();
    }

    /// Carry out a command emitted by input handling.
    pub fn execute(&mut self, state: &mut AppState, command: Command) {
        match command {
            Command::RefreshRandomWord => self.load_random_word(state),
            Command::Search(word) => {
                if let Err(err) = self.search_word(state, word.as_deref()) {
                    state.show_alert("", err.to_string());
                }
            }
            Command::Quit => state.should_quit = true,
        }
    }

    /// Cancel everything in flight. Later results are never delivered.
    pub fn shutdown(&self) {
        self.scope.cancel();
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
