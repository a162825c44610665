//! Input handling: maps key events to state edits and [`Command`]s.
//!
//! Nothing here talks to the network. Anything that needs a request is
//! returned as a command for the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;

use super::command::Command;
use super::state::{ActiveView, AppState, HomeFocus};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<Command> {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    if state.alert.is_some() {
        handle_alert_key(state, key);
        return None;
    }

    match state.active_view {
        ActiveView::Home => match state.focus {
            HomeFocus::SearchInput => handle_search_input_key(state, key),
            HomeFocus::Grid => handle_grid_key(state, key),
        },
        ActiveView::Details => handle_details_key(state, key),
    }
}

// ── Alert (modal) ───────────────────────────────────────────────

fn handle_alert_key(state: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        state.alert = None;
    }
}

// ── Search bar (free text, hardcoded editing keys) ──────────────

fn handle_search_input_key(state: &mut AppState, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Enter => return Some(Command::Search(Some(state.search_input.clone()))),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => state.focus = HomeFocus::Grid,
        KeyCode::Backspace => {
            state.search_input.pop();
        }
        KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => state.search_input.clear(),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            state.search_input.push(ch);
        }
        _ => {
            // Modified keys may still be bound (e.g. Ctrl+r for a new word).
            if state.config.match_key(key) == Some(Action::RefreshWord) {
                return Some(Command::RefreshRandomWord);
            }
        }
    }
    None
}

// ── Definitions grid (configurable bindings) ────────────────────

fn handle_grid_key(state: &mut AppState, key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Tab {
        state.focus = HomeFocus::SearchInput;
        return None;
    }

    let action = state.config.match_key(key)?;
    let len = state.search.len();

    match action {
        Action::Quit => return Some(Command::Quit),
        Action::RefreshWord => return Some(Command::RefreshRandomWord),
        Action::FocusSearch | Action::Back => state.focus = HomeFocus::SearchInput,
        Action::MoveUp => {
            // Moving up past the first row lands in the search bar.
            if !state.grid.move_up() {
                state.focus = HomeFocus::SearchInput;
            }
        }
        Action::MoveDown => state.grid.move_down(len),
        Action::MoveLeft => state.grid.move_left(),
        Action::MoveRight => state.grid.move_right(len),
        Action::OpenDetails => {
            if state.selected_result().is_some() {
                state.details_scroll = 0;
                state.active_view = ActiveView::Details;
            }
        }
    }
    None
}

// ── Details screen ──────────────────────────────────────────────

fn handle_details_key(state: &mut AppState, key: KeyEvent) -> Option<Command> {
    let action = state.config.match_key(key)?;
    match action {
        Action::Quit => return Some(Command::Quit),
        Action::Back | Action::MoveLeft => state.active_view = ActiveView::Home,
        Action::MoveUp => state.details_scroll = state.details_scroll.saturating_sub(1),
        Action::MoveDown => state.details_scroll = state.details_scroll.saturating_add(1),
        _ => {}
    }
    None
}
