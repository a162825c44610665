//! Definitions grid: one bordered cell per sense, laid out row-major in as
//! many columns as the width allows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::core::model::WordResult;

use super::theme::Theme;

/// Narrowest a cell may get before a column is dropped.
pub const MIN_CELL_WIDTH: u16 = 30;
/// Cell height including its border.
pub const CELL_HEIGHT: u16 = 6;
const MAX_COLUMNS: usize = 4;

/// Number of columns that fit in `width`.
pub fn columns_for_width(width: u16) -> usize {
    ((width / MIN_CELL_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

// ───────────────────────────────────────── state ─────────────

/// Persistent state for the grid (selection, scroll, last column count).
#[derive(Debug, Default)]
pub struct GridState {
    /// Index into the results list.
    pub selected: usize,
    /// First visible row.
    pub row_offset: usize,
    /// Column count from the last render. Zero until the first frame.
    pub columns: usize,
}

impl GridState {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.row_offset = 0;
    }

    fn cols(&self) -> usize {
        self.columns.max(1)
    }

    fn row_of(&self, index: usize) -> usize {
        index / self.cols()
    }

    /// Returns `false` when already on the first row.
    pub fn move_up(&mut self) -> bool {
        if self.selected >= self.cols() {
            self.selected -= self.cols();
            true
        } else {
            false
        }
    }

    /// Down one row; from the second-to-last row a short last row clamps to
    /// its final cell.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected + self.cols() < len {
            self.selected += self.cols();
        } else if self.row_of(self.selected) < self.row_of(len - 1) {
            self.selected = len - 1;
        }
    }

    pub fn move_left(&mut self) {
        if self.selected % self.cols() > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self, len: usize) {
        if self.selected % self.cols() + 1 < self.cols() && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Keep the selection inside `len` and its row inside a viewport of
    /// `visible_rows` rows.
    pub fn clamp_scroll(&mut self, len: usize, visible_rows: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        if visible_rows == 0 {
            return;
        }
        let row = self.row_of(self.selected);
        if row < self.row_offset {
            self.row_offset = row;
        } else if row >= self.row_offset + visible_rows {
            self.row_offset = row + 1 - visible_rows;
        }
    }
}

// ───────────────────────────────────────── widget ────────────

/// The grid widget: created fresh each frame.
pub struct DefinitionGrid<'a> {
    /// `None` before the first successful search.
    results: Option<&'a [WordResult]>,
    word: Option<&'a str>,
    focused: bool,
    block: Option<Block<'a>>,
}

impl<'a> DefinitionGrid<'a> {
    pub fn new(results: Option<&'a [WordResult]>, word: Option<&'a str>) -> Self {
        Self {
            results,
            word,
            focused: false,
            block: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn render_placeholder(text: String, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(text, Theme::muted_style())))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_cell(result: &WordResult, selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if selected {
            Theme::selected_border_style()
        } else {
            Theme::border_style()
        };
        let title = result.part_of_speech.as_deref().unwrap_or("—");
        let block = Block::default()
            .title(Span::styled(format!(" {title} "), Theme::part_of_speech_style()))
            .borders(Borders::ALL)
            .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style);

        Paragraph::new(Span::styled(
            result.definition.as_deref().unwrap_or_default(),
            Theme::definition_style(),
        ))
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
    }
}

impl<'a> StatefulWidget for DefinitionGrid<'a> {
    type State = GridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = match self.block {
            Some(ref block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        state.columns = columns_for_width(inner.width);

        let results = match (self.results, self.word) {
            (Some(results), _) if !results.is_empty() => results,
            (Some(_), Some(word)) => {
                Self::render_placeholder(format!("No definitions found for \"{word}\"."), inner, buf);
                return;
            }
            _ => {
                Self::render_placeholder(
                    "Search for a word to see its definitions.".to_string(),
                    inner,
                    buf,
                );
                return;
            }
        };

        let cols = state.columns;
        let visible_rows = ((inner.height / CELL_HEIGHT) as usize).max(1);
        state.clamp_scroll(results.len(), visible_rows);

        let cell_width = inner.width / cols as u16;
        let first = state.row_offset * cols;
        let last = (first + visible_rows * cols).min(results.len());

        for (index, result) in results.iter().enumerate().take(last).skip(first) {
            let row = (index / cols - state.row_offset) as u16;
            let col = (index % cols) as u16;
            let y = inner.y + row * CELL_HEIGHT;
            // Last column absorbs the rounding remainder.
            let width = if col as usize == cols - 1 {
                inner.width - col * cell_width
            } else {
                cell_width
            };
            let height = CELL_HEIGHT.min(inner.bottom().saturating_sub(y));
            let cell = Rect::new(inner.x + col * cell_width, y, width, height);
            Self::render_cell(result, self.focused && index == state.selected, cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(selected: usize, columns: usize) -> GridState {
        GridState {
            selected,
            row_offset: 0,
            columns,
        }
    }

    fn sense(pos: &str, definition: &str) -> WordResult {
        WordResult {
            part_of_speech: Some(pos.into()),
            definition: Some(definition.into()),
            ..WordResult::default()
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn columns_follow_width() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(29), 1);
        assert_eq!(columns_for_width(60), 2);
        assert_eq!(columns_for_width(500), MAX_COLUMNS);
    }

    #[test]
    fn horizontal_moves_stay_on_the_row() {
        let mut s = state(1, 2);
        s.move_right(6);
        assert_eq!(s.selected, 1);
        s.move_left();
        assert_eq!(s.selected, 0);
        s.move_left();
        assert_eq!(s.selected, 0);
    }

    #[test]
    fn move_right_stops_at_last_item() {
        let mut s = state(2, 3);
        s.move_right(3);
        assert_eq!(s.selected, 2);
    }

    #[test]
    fn move_down_clamps_into_short_last_row() {
        let mut s = state(2, 3);
        s.move_down(4);
        assert_eq!(s.selected, 3);
        s.move_down(4);
        assert_eq!(s.selected, 3);
        assert!(s.move_up());
        assert_eq!(s.selected, 0);
        assert!(!s.move_up());
    }

    #[test]
    fn scroll_follows_selection() {
        let mut s = state(9, 2);
        s.clamp_scroll(10, 2);
        assert_eq!(s.row_offset, 3);
        s.selected = 0;
        s.clamp_scroll(10, 2);
        assert_eq!(s.row_offset, 0);
    }

    #[test]
    fn selection_is_clamped_to_results() {
        let mut s = state(7, 2);
        s.clamp_scroll(3, 4);
        assert_eq!(s.selected, 2);
    }

    #[test]
    fn renders_cells_and_records_columns() {
        let results = vec![sense("verb", "move fast"), sense("noun", "a score")];
        let area = Rect::new(0, 0, 64, 12);
        let mut buf = Buffer::empty(area);
        let mut grid_state = GridState::default();

        DefinitionGrid::new(Some(results.as_slice()), Some("run"))
            .focused(true)
            .render(area, &mut buf, &mut grid_state);

        assert_eq!(grid_state.columns, 2);
        let text = buffer_text(&buf);
        assert!(text.contains("verb"));
        assert!(text.contains("move fast"));
        assert!(text.contains("a score"));
    }

    #[test]
    fn placeholder_before_first_search_and_for_empty_results() {
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        let mut grid_state = GridState::default();
        DefinitionGrid::new(None, None).render(area, &mut buf, &mut grid_state);
        assert!(buffer_text(&buf).contains("Search for a word"));

        let mut buf = Buffer::empty(area);
        DefinitionGrid::new(Some(&[][..]), Some("qwxz")).render(area, &mut buf, &mut grid_state);
        assert!(buffer_text(&buf).contains("No definitions found for \"qwxz\""));
    }
}
