//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Home screen: title, word-of-the-day card, search bar, definitions grid,
/// and a bottom status bar.
pub struct HomeLayout {
    pub title_area: Rect,
    pub card_area: Rect,
    pub search_area: Rect,
    pub grid_area: Rect,
    pub status_area: Rect,
}

impl HomeLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // app title
                Constraint::Length(6), // word of the day
                Constraint::Length(3), // search bar
                Constraint::Min(3),    // definitions grid (takes the rest)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            card_area: chunks[1],
            search_area: chunks[2],
            grid_area: chunks[3],
            status_area: chunks[4],
        }
    }
}

/// Details screen: body plus status bar.
pub struct DetailsLayout {
    pub body_area: Rect,
    pub status_area: Rect,
}

impl DetailsLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self {
            body_area: chunks[0],
            status_area: chunks[1],
        }
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
