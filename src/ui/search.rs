//! Search bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::theme::Theme;

pub struct SearchBar<'a> {
    pub query: &'a str,
    pub has_focus: bool,
}

impl<'a> Widget for SearchBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.has_focus {
            Theme::focused_border_style()
        } else {
            Theme::border_style()
        };
        let block = Block::default()
            .title(" Search ")
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let line = if self.query.is_empty() && !self.has_focus {
            Line::from(Span::styled("type a word and press Enter", Theme::muted_style()))
        } else {
            let mut spans = vec![Span::styled(self.query.to_string(), Theme::input_style())];
            if self.has_focus {
                spans.push(Span::styled(
                    "▏",
                    Theme::input_style().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
