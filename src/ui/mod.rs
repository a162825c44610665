//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer turns `AppState` into cells on the terminal. No network I/O
//! happens here; the only state it writes back is grid geometry.

pub mod details;
pub mod grid;
pub mod layout;
pub mod popup;
pub mod search;
pub mod spinner;
pub mod theme;
pub mod word_card;

use ratatui::{
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{ActiveView, AppState, HomeFocus};
use crate::config::Action;

use self::{
    details::DetailsView,
    grid::DefinitionGrid,
    layout::{DetailsLayout, HomeLayout},
    popup::AlertPopup,
    search::SearchBar,
    spinner::LoadingIndicator,
    theme::Theme,
    word_card::WordCard,
};

/// Draw the whole screen for the current state.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    match state.active_view {
        ActiveView::Home => draw_home(frame, state),
        ActiveView::Details => draw_details(frame, state),
    }

    // The indicator sits on the top border row of the screen.
    frame.render_widget(
        LoadingIndicator {
            visible: state.loading,
            tick: state.tick,
        },
        area,
    );

    if let Some(alert) = &state.alert {
        frame.render_widget(AlertPopup { alert }, area);
    }
}

fn draw_home(frame: &mut Frame, state: &mut AppState) {
    let layout = HomeLayout::from_area(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" wordgrid", Theme::title_style()),
            Span::styled(".", Theme::word_style()),
        ])),
        layout.title_area,
    );

    let refresh_hint = format!("{}: new word", state.config.short_binding(Action::RefreshWord));
    frame.render_widget(
        WordCard {
            summary: state.summary.as_ref(),
            refresh_hint: &refresh_hint,
        },
        layout.card_area,
    );

    frame.render_widget(
        SearchBar {
            query: &state.search_input,
            has_focus: state.focus == HomeFocus::SearchInput,
        },
        layout.search_area,
    );

    let grid_focused = state.focus == HomeFocus::Grid;
    let title = match &state.search.selected_word {
        Some(word) => format!(" Definitions of \"{word}\" ({}) ", state.search.len()),
        None => " Definitions ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if grid_focused {
            Theme::focused_border_style()
        } else {
            Theme::border_style()
        });
    let grid = DefinitionGrid::new(
        state.search.results.as_deref(),
        state.search.selected_word.as_deref(),
    )
    .focused(grid_focused)
    .block(block);
    frame.render_stateful_widget(grid, layout.grid_area, &mut state.grid);

    let hint = state.config.status_bar_hint();
    frame.render_widget(
        Paragraph::new(hint).style(Theme::status_bar_style()),
        layout.status_area,
    );
}

fn draw_details(frame: &mut Frame, state: &mut AppState) {
    let layout = DetailsLayout::from_area(frame.area());
    let word = state.search.selected_word.as_deref().unwrap_or_default();

    match state.selected_result() {
        Some(result) => frame.render_widget(
            DetailsView {
                word,
                result,
                scroll: state.details_scroll,
            },
            layout.body_area,
        ),
        None => frame.render_widget(
            Paragraph::new("Nothing selected.").style(Theme::muted_style()),
            layout.body_area,
        ),
    }

    let hint = format!(
        "{}: back | {}/{}: scroll | {}: quit",
        state.config.short_binding(Action::Back),
        state.config.short_binding(Action::MoveUp),
        state.config.short_binding(Action::MoveDown),
        state.config.short_binding(Action::Quit),
    );
    frame.render_widget(
        Paragraph::new(hint).style(Theme::status_bar_style()),
        layout.status_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SearchState;
    use crate::config::AppConfig;
    use crate::core::model::{RandomWordSummary, WordResult};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn searched_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.summary = Some(RandomWordSummary {
            word: "petrichor".into(),
            part_of_speech: Some("noun".into()),
            definition: Some("the smell of rain on dry earth".into()),
            fetched_at: chrono::Local::now(),
        });
        state.search = SearchState {
            selected_word: Some("run".into()),
            results: Some(vec![WordResult {
                part_of_speech: Some("verb".into()),
                definition: Some("move fast".into()),
                synonyms: vec!["sprint".into()],
                ..WordResult::default()
            }]),
        };
        state
    }

    #[test]
    fn home_screen_shows_card_grid_and_spinner() {
        let mut state = searched_state();
        state.loading = true;
        let text = screen(&mut state, 80, 30);

        assert!(text.contains("petrichor"));
        assert!(text.contains("the smell of rain on dry earth"));
        assert!(text.contains("Definitions of \"run\" (1)"));
        assert!(text.contains("move fast"));
        assert!(text.contains("loading"));
        assert_eq!(state.grid.columns, 2);
    }

    #[test]
    fn details_screen_shows_extra_sections() {
        let mut state = searched_state();
        state.active_view = ActiveView::Details;
        let text = screen(&mut state, 80, 20);

        assert!(text.contains("Synonyms"));
        assert!(text.contains("sprint"));
        assert!(!text.contains("loading"));
    }

    #[test]
    fn alert_is_drawn_on_top() {
        let mut state = AppState::new(AppConfig::default());
        state.show_alert("", "Please enter a word");
        let text = screen(&mut state, 80, 24);
        assert!(text.contains("Please enter a word"));
        assert!(text.contains("[ OK ]"));
    }
}
