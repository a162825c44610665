//! Details screen for one sense of the searched word.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::core::model::WordResult;

use super::theme::Theme;

pub struct DetailsView<'a> {
    pub word: &'a str,
    pub result: &'a WordResult,
    /// Lines scrolled off the top.
    pub scroll: u16,
}

impl<'a> DetailsView<'a> {
    fn lines(&self) -> Vec<Line<'a>> {
        let result: &'a WordResult = self.result;
        let mut lines = vec![Line::from(Span::styled(self.word, Theme::word_style()))];
        if let Some(pos) = &result.part_of_speech {
            lines.push(Line::from(Span::styled(pos.as_str(), Theme::part_of_speech_style())));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            result.definition.as_deref().unwrap_or_default(),
            Theme::definition_style(),
        )));

        let sections: [(&str, &[String]); 4] = [
            ("Synonyms", result.synonyms.as_slice()),
            ("Antonyms", result.antonyms.as_slice()),
            ("Type of", result.type_of.as_slice()),
            ("Examples", result.examples.as_slice()),
        ];
        for (heading, items) in sections {
            if items.is_empty() {
                continue;
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(heading, Theme::section_style())));
            if heading == "Examples" {
                lines.extend(items.iter().map(|e| Line::raw(format!("  “{e}”"))));
            } else {
                lines.push(Line::raw(format!("  {}", items.join(", "))));
            }
        }
        lines
    }
}

impl<'a> Widget for DetailsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Definition ")
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn omits_empty_sections() {
        let result = WordResult {
            part_of_speech: Some("verb".into()),
            definition: Some("move fast".into()),
            synonyms: vec!["dash".into(), "sprint".into()],
            examples: vec!["run for the bus".into()],
            ..WordResult::default()
        };
        let view = DetailsView { word: "run", result: &result, scroll: 0 };
        let text = text_of(&view.lines());

        assert_eq!(text[0], "run");
        assert_eq!(text[1], "verb");
        assert!(text.contains(&"move fast".to_string()));
        assert!(text.contains(&"  dash, sprint".to_string()));
        assert!(text.contains(&"  “run for the bus”".to_string()));
        assert!(!text.iter().any(|l| l == "Antonyms" || l == "Type of"));
    }
}
