//! Prompt construction for the cooking assistant.
//!
//! Intent detection is a case-insensitive substring match with no
//! negation handling ("no calories please" still selects the calorie
//! template). That fragility is intentional, kept as-is from the shipped
//! behavior.

use crate::session::SessionContext;

/// Prompt asking the backend for a calorie estimate.
///
/// Loaded from `calories.txt` at compile time so the wording can be
/// edited without dealing with Rust string syntax.
pub const CALORIE_PROMPT: &str = include_str!("calories.txt");

/// Prompt asking the backend for a serving-size estimate.
pub const SERVINGS_PROMPT: &str = include_str!("servings.txt");

/// Value interpolated when a context field is missing.
const UNKNOWN: &str = "Unknown";

/// Classified purpose of a user chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Calories,
    Servings,
    General,
}

impl Intent {
    /// Classify a message. Checks run in precedence order; the first
    /// match wins.
    pub fn detect(message: &str) -> Intent {
        let lowered = message.to_lowercase();
        if lowered.contains("calories") {
            Intent::Calories
        } else if lowered.contains("servings") {
            Intent::Servings
        } else {
            Intent::General
        }
    }
}

/// Build the prompt sent to the conversation backend for one user
/// message, given the stored recipe context.
///
/// Estimation questions get a specialized template with the last recipe
/// interpolated (fields default to `"Unknown"` when absent). Everything
/// else gets the raw message, prefixed with a context block when a
/// recipe has been generated. No numeric work happens here; estimation
/// is fully delegated to the backend.
pub fn build_prompt(message: &str, context: &SessionContext) -> String {
    match Intent::detect(message) {
        Intent::Calories => fill_template(CALORIE_PROMPT, context),
        Intent::Servings => fill_template(SERVINGS_PROMPT, context),
        Intent::General => {
            let mut prompt = String::new();
            if let (Some(ingredients), Some(recipe)) =
                (&context.last_ingredients, &context.last_recipe)
            {
                prompt.push_str(&format!(
                    "Here is the recipe and ingredients: {}\n{}\n",
                    ingredients, recipe
                ));
            }
            prompt.push('\n');
            prompt.push_str(message);
            prompt
        }
    }
}

fn fill_template(template: &str, context: &SessionContext) -> String {
    template
        .replace(
            "{ingredients}",
            context.last_ingredients.as_deref().unwrap_or(UNKNOWN),
        )
        .replace("{recipe}", context.last_recipe.as_deref().unwrap_or(UNKNOWN))
}
