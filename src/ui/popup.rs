//! Modal alert overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::app::state::Alert;

use super::layout::centered_fixed;

const POPUP_WIDTH: u16 = 48;

pub struct AlertPopup<'a> {
    pub alert: &'a Alert,
}

/// Rows `text` takes when word-wrapped at `width` columns. Words longer than
/// a row are broken across rows.
fn wrapped_rows(text: &str, width: usize) -> usize {
    let width = width.max(1);
    let mut rows = 1;
    let mut col = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if col == 0 { len } else { col + 1 + len };
        if needed <= width {
            col = needed;
        } else if len <= width {
            rows += 1;
            col = len;
        } else {
            if col > 0 {
                rows += 1;
            }
            rows += (len - 1) / width;
            col = (len - 1) % width + 1;
        }
    }
    rows
}

impl<'a> Widget for AlertPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Borders plus one column of padding per side.
        let text_width = POPUP_WIDTH.saturating_sub(4) as usize;
        let message_rows = wrapped_rows(&self.alert.message, text_width) as u16;
        // Borders, blank, message, blank, button.
        let height = message_rows.saturating_add(5);
        let popup = centered_fixed(POPUP_WIDTH, height, area);
        Clear.render(popup, buf);

        let title = if self.alert.title.is_empty() {
            String::new()
        } else {
            format!(" {} ", self.alert.title)
        };
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        block.render(popup, buf);

        // The button keeps its row even when the message has to be clipped.
        let [_, message_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.alert.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        Paragraph::new(Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(button_area, buf);
    }
}
