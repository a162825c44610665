//! Loading indicator: a small spinner + label rendered in the top-right
//! corner of a given area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Braille-dot spinner frames.  Cycles through these on each tick.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A "loading…" badge with a spinning icon, drawn over a border row.
///
/// Invisible when `visible` is false.
pub struct LoadingIndicator {
    pub visible: bool,
    /// Monotonically increasing tick counter (drives the spinner frame).
    pub tick: u64,
}

impl Widget for LoadingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || area.width < 14 || area.height == 0 {
            return;
        }

        let frame = SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()];
        let label = format!(" {frame} loading ");

        let label_width = label.chars().count() as u16;
        // Top-right, leaving one column for the border corner.
        let x = area.x + area.width.saturating_sub(label_width + 2);

        let line = Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

        buf.set_line(x, area.y, &line, label_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn draws_only_while_visible() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        LoadingIndicator { visible: false, tick: 0 }.render(area, &mut buf);
        assert!(!row_text(&buf, 0).contains("loading"));

        LoadingIndicator { visible: true, tick: 1 }.render(area, &mut buf);
        let row = row_text(&buf, 0);
        assert!(row.contains("⠙ loading"));
    }
}
