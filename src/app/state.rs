//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling
//! and fetch results). The event loop is the only owner.

use crate::config::AppConfig;
use crate::core::model::{RandomWordSummary, WordResult};
use crate::ui::grid::GridState;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Home,
    /// Details of the grid entry at `GridState::selected`.
    Details,
}

/// Which home-screen component receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    SearchInput,
    Grid,
}

/// Modal message that blocks input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Results of the last successful search.
///
/// Replaced wholesale by the controller; nothing else writes `selected_word`
/// or `results`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// The word the API answered for (not necessarily what was typed).
    pub selected_word: Option<String>,
    /// Senses that carry a definition, in API order.
    pub results: Option<Vec<WordResult>>,
}

impl SearchState {
    pub fn len(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }

    pub fn get(&self, index: usize) -> Option<&WordResult> {
        self.results.as_ref().and_then(|r| r.get(index))
    }
}

/// Top-level application state.
pub struct AppState {
    /// Word-of-the-day card contents. `None` until the first fetch lands.
    pub summary: Option<RandomWordSummary>,
    /// Last search outcome.
    pub search: SearchState,
    /// `true` while the newest random-word or search request is in flight.
    pub loading: bool,
    /// Text typed into the search bar.
    pub search_input: String,
    /// Grid selection and scroll.
    pub grid: GridState,
    /// Vertical scroll of the details screen.
    pub details_scroll: u16,
    pub active_view: ActiveView,
    pub focus: HomeFocus,
    pub alert: Option<Alert>,
    /// Keybindings and API settings.
    pub config: AppConfig,
    /// Drives the spinner frame.
    pub tick: u64,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            summary: None,
            search: SearchState::default(),
            loading: false,
            search_input: String::new(),
            grid: GridState::default(),
            details_scroll: 0,
            active_view: ActiveView::default(),
            focus: HomeFocus::default(),
            alert: None,
            config,
            tick: 0,
            should_quit: false,
        }
    }

    /// The grid entry the details screen should show.
    pub fn selected_result(&self) -> Option<&WordResult> {
        self.search.get(self.grid.selected)
    }

    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }
}
