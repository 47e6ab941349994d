//! The hosted-model boundary and the end-to-end suggestion pipeline.

use super::request::{render_prompt, SuggestionRequest};
use super::response::{parse_suggestion, ResolvedSuggestion};
use crate::cards::Catalog;
use crate::core::error::SuggestionError;

/// Something that turns a prompt into model text.
///
/// The hosted model call (transport, retries, timeouts) lives behind this
/// trait; the pipeline only sees the resolved text.
pub trait SuggestionGenerator {
    fn generate(&self, prompt: &str) -> Result<String, SuggestionError>;
}

impl<F> SuggestionGenerator for F
where
    F: Fn(&str) -> Result<String, SuggestionError>,
{
    fn generate(&self, prompt: &str) -> Result<String, SuggestionError> {
        self(prompt)
    }
}

/// Prompt, generate, parse, resolve.
pub fn suggest_deck<G: SuggestionGenerator + ?Sized>(
    generator: &G,
    request: &SuggestionRequest,
    catalog: &Catalog,
) -> Result<ResolvedSuggestion, SuggestionError> {
    let prompt = render_prompt(request);
    let text = generator.generate(&prompt).inspect_err(|e| {
        tracing::warn!(error = %e, "deck suggestion generator failed");
    })?;
    let suggestion = parse_suggestion(&text)?;
    Ok(suggestion.resolve(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardRecord;
    use crate::core::config::EditorConfig;

    fn request() -> SuggestionRequest {
        SuggestionRequest::new(
            "Lots of bridge spam this season; Battle Ram and Bandit show up in nearly every top ladder deck.",
            &EditorConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_pipeline_with_closure() {
        let catalog = Catalog::new(vec![CardRecord::new("Bandit", "", 3, 1)]).unwrap();
        let generator = |prompt: &str| -> Result<String, SuggestionError> {
            assert!(prompt.contains("Battle Ram and Bandit"));
            Ok(r#"{"deckName":"Spam","cards":["bandit","Battle Ram"],"overview":"","pros":"","cons":""}"#.to_string())
        };

        let resolved = suggest_deck(&generator, &request(), &catalog).unwrap();

        assert_eq!(resolved.deck_name, "Spam");
        assert_eq!(resolved.unknown_count(), 1);
    }

    #[test]
    fn test_generator_error_propagates() {
        let catalog = Catalog::empty();
        let generator = |_: &str| -> Result<String, SuggestionError> {
            Err(SuggestionError::Generator("quota exceeded".to_string()))
        };

        let err = suggest_deck(&generator, &request(), &catalog).unwrap_err();
        assert_eq!(err.to_string(), "generator failed: quota exceeded");
    }
}
