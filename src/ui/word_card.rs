//! Word-of-the-day card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::core::model::RandomWordSummary;

use super::theme::Theme;

pub struct WordCard<'a> {
    pub summary: Option<&'a RandomWordSummary>,
    /// Shown in the card's bottom border (e.g. "Ctrl+r: new word").
    pub refresh_hint: &'a str,
}

impl<'a> Widget for WordCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .title(Span::styled(" Word of the day ", Theme::title_style()))
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", self.refresh_hint),
                Theme::muted_style(),
            )).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());

        let Some(summary) = self.summary else {
            Paragraph::new(Span::styled("…", Theme::muted_style()))
                .block(block)
                .render(area, buf);
            return;
        };

        block = block.title(
            Line::from(Span::styled(
                format!(" {} ", summary.fetched_at.format("%a %d %b %H:%M")),
                Theme::muted_style(),
            ))
            .right_aligned(),
        );

        let mut lines = vec![Line::from(Span::styled(summary.word.clone(), Theme::word_style()))];
        if let Some(pos) = &summary.part_of_speech {
            lines.push(Line::from(Span::styled(pos.clone(), Theme::part_of_speech_style())));
        }
        if let Some(definition) = &summary.definition {
            lines.push(Line::from(Span::styled(definition.clone(), Theme::definition_style())));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
