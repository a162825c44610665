//! Dictionary data model as returned by a WordsAPI-compatible service.
//!
//! Only the fields the UI renders are decoded; everything else in the payload
//! is ignored by serde.

use chrono::{DateTime, Local};
use serde::Deserialize;

/// A dictionary entry for one word, with zero or more senses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordDetail {
    pub word: String,
    /// The API omits `results` entirely for words it knows nothing about.
    #[serde(default)]
    pub results: Option<Vec<WordResult>>,
}

/// One sense of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub type_of: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl WordDetail {
    /// First sense, if any. Drives the word-of-the-day card.
    pub fn first_result(&self) -> Option<&WordResult> {
        self.results.as_ref().and_then(|r| r.first())
    }

    /// Consume the entry, keeping only senses that carry a definition.
    /// Order is preserved.
    pub fn into_defined_results(self) -> Vec<WordResult> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.definition.is_some())
            .collect()
    }
}

/// What the word-of-the-day card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomWordSummary {
    pub word: String,
    pub part_of_speech: Option<String>,
    pub definition: Option<String>,
    pub fetched_at: DateTime<Local>,
}

impl RandomWordSummary {
    pub fn from_detail(detail: &WordDetail) -> Self {
        let first = detail.first_result();
        Self {
            word: detail.word.clone(),
            part_of_speech: first.and_then(|r| r.part_of_speech.clone()),
            definition: first.and_then(|r| r.definition.clone()),
            fetched_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN_PAYLOAD: &str = r#"{
        "word": "run",
        "results": [
            {
                "definition": "move fast by using one's feet",
                "partOfSpeech": "verb",
                "synonyms": ["scarper", "turn tail"],
                "typeOf": ["travel rapidly"],
                "examples": ["Don't run--you'll be out of breath"]
            },
            { "partOfSpeech": "noun" },
            { "definition": "a score in baseball", "partOfSpeech": null }
        ],
        "syllables": { "count": 1, "list": ["run"] },
        "frequency": 6.05
    }"#;

    #[test]
    fn decodes_api_payload_and_ignores_unknown_fields() {
        let detail: WordDetail = serde_json::from_str(RUN_PAYLOAD).unwrap();
        assert_eq!(detail.word, "run");
        let results = detail.results.as_ref().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].part_of_speech.as_deref(), Some("verb"));
        assert_eq!(results[0].synonyms, vec!["scarper", "turn tail"]);
        assert_eq!(results[0].type_of, vec!["travel rapidly"]);
        assert!(results[0].antonyms.is_empty());
        assert_eq!(results[1].definition, None);
        assert_eq!(results[2].part_of_speech, None);
    }

    #[test]
    fn missing_results_decode_as_none() {
        let detail: WordDetail = serde_json::from_str(r#"{"word":"zzz"}"#).unwrap();
        assert_eq!(detail.results, None);
        assert!(detail.first_result().is_none());
        assert!(detail.into_defined_results().is_empty());
    }

    #[test]
    fn defined_results_drop_empty_senses_and_keep_order() {
        let detail: WordDetail = serde_json::from_str(RUN_PAYLOAD).unwrap();
        let defined = detail.into_defined_results();
        let defs: Vec<_> = defined
            .iter()
            .map(|r| r.definition.as_deref().unwrap())
            .collect();
        assert_eq!(defs, vec!["move fast by using one's feet", "a score in baseball"]);
    }

    #[test]
    fn summary_takes_the_first_sense() {
        let detail: WordDetail = serde_json::from_str(RUN_PAYLOAD).unwrap();
        let summary = RandomWordSummary::from_detail(&detail);
        assert_eq!(summary.word, "run");
        assert_eq!(summary.part_of_speech.as_deref(), Some("verb"));
        assert_eq!(summary.definition.as_deref(), Some("move fast by using one's feet"));
    }

    #[test]
    fn summary_of_word_without_senses_has_only_the_word() {
        let detail = WordDetail {
            word: "quux".into(),
            results: Some(Vec::new()),
        };
        let summary = RandomWordSummary::from_detail(&detail);
        assert_eq!(summary.word, "quux");
        assert_eq!(summary.part_of_speech, None);
        assert_eq!(summary.definition, None);
    }
}
