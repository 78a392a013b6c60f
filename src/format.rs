//! Turns raw model output into displayable recipe sections.
//!
//! The generation model emits loosely tagged text: newline-separated
//! fields prefixed with `title:`, `ingredients:` or `directions:`, with
//! list items separated by `;`. Nothing about that shape is guaranteed,
//! so everything here is defensive: unrecognized lines are skipped and
//! an input with no recognized tags falls back to the raw text verbatim.

use crate::model::{FormattedRecipe, RecipeSection};

/// Result of a formatting attempt.
///
/// Callers that only want something to display can use
/// [`FormatOutcome::to_markdown`]; callers that care whether formatting
/// actually happened (e.g. for logging) can match on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatOutcome {
    /// At least one tagged section was recognized
    Formatted(FormattedRecipe),
    /// Nothing was recognized; carries the original input unchanged
    RawFallback(String),
}

impl FormatOutcome {
    /// Render the outcome for display. The fallback renders as the raw
    /// text itself, so display never fails.
    pub fn to_markdown(&self) -> String {
        match self {
            FormatOutcome::Formatted(recipe) => recipe.to_markdown(),
            FormatOutcome::RawFallback(raw) => raw.clone(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FormatOutcome::RawFallback(_))
    }
}

/// Format raw model output into recipe sections.
///
/// Prefix matching is case-sensitive and line-oriented. Sections are
/// emitted in the order their tags appear in the input, and duplicated
/// tags yield repeated sections. List payloads are split on `;`, each
/// piece trimmed, empty pieces dropped.
pub fn format_recipe(raw: &str) -> FormatOutcome {
    let mut sections = Vec::new();

    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix("title:") {
            sections.push(RecipeSection::Title(rest.trim().to_string()));
        } else if let Some(rest) = line.strip_prefix("ingredients:") {
            sections.push(RecipeSection::Ingredients(split_items(rest)));
        } else if let Some(rest) = line.strip_prefix("directions:") {
            sections.push(RecipeSection::Directions(split_items(rest)));
        }
        // anything else is noise from the model; skip it
    }

    if sections.is_empty() {
        FormatOutcome::RawFallback(raw.to_string())
    } else {
        FormatOutcome::Formatted(FormattedRecipe { sections })
    }
}

fn split_items(payload: &str) -> Vec<String> {
    payload
        .split(';')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}
