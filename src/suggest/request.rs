//! Suggestion requests and the prompt sent to the generator.

use serde::{Deserialize, Serialize};

use crate::core::config::EditorConfig;
use crate::core::error::SuggestionError;

/// A validated free-text summary of recent videos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    recent_video_summary: String,
}

impl SuggestionRequest {
    /// Validate a summary against the configured length bounds.
    ///
    /// Length is counted in characters, not bytes.
    pub fn new(summary: impl Into<String>, config: &EditorConfig) -> Result<Self, SuggestionError> {
        let summary = summary.into();
        let len = summary.chars().count();

        if len < config.summary_min_chars {
            return Err(SuggestionError::SummaryTooShort {
                len,
                min: config.summary_min_chars,
            });
        }
        if len > config.summary_max_chars {
            return Err(SuggestionError::SummaryTooLong {
                len,
                max: config.summary_max_chars,
            });
        }

        Ok(Self {
            recent_video_summary: summary,
        })
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.recent_video_summary
    }
}

/// Build the instruction prompt for a request.
#[must_use]
pub fn render_prompt(request: &SuggestionRequest) -> String {
    format!(
        r#"You are an expert Clash Royale deck builder. Based on the following summary of recent Clash Royale videos, suggest an original and effective deck.

Summary: {}

Consider the current game meta and popular strategies when creating the deck. Provide a deck name, a list of cards, an overview of the deck and its playstyle, the strengths of the deck, and the weaknesses of the deck.

Output should be formatted as JSON:
{{
  "deckName": "",
  "cards": ["", "", "", "", "", "", "", ""],
  "overview": "",
  "pros": "",
  "cons": ""
}}
"#,
        request.summary()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(len: usize) -> String {
        "x".repeat(len)
    }

    #[test]
    fn test_bounds_inclusive() {
        let config = EditorConfig::default();
        assert!(SuggestionRequest::new(summary(50), &config).is_ok());
        assert!(SuggestionRequest::new(summary(1000), &config).is_ok());
    }

    #[test]
    fn test_too_short() {
        let err = SuggestionRequest::new(summary(49), &EditorConfig::default()).unwrap_err();
        assert!(matches!(err, SuggestionError::SummaryTooShort { len: 49, min: 50 }));
    }

    #[test]
    fn test_too_long() {
        let err = SuggestionRequest::new(summary(1001), &EditorConfig::default()).unwrap_err();
        assert!(matches!(err, SuggestionError::SummaryTooLong { len: 1001, max: 1000 }));
    }

    #[test]
    fn test_counts_characters() {
        // 50 two-byte characters
        let request = SuggestionRequest::new("é".repeat(50), &EditorConfig::default());
        assert!(request.is_ok());
    }

    #[test]
    fn test_prompt_contains_summary_and_shape() {
        let text = "Hog cycle is everywhere this week, with Earthquake replacing Fireball in most lists.";
        let request = SuggestionRequest::new(text, &EditorConfig::default()).unwrap();
        let prompt = render_prompt(&request);

        assert!(prompt.contains(&format!("Summary: {}", text)));
        assert!(prompt.contains(r#""deckName": """#));
        assert!(prompt.contains(r#""cons": """#));
    }
}
