use serde::Serialize;

/// One section of a formatted recipe, in the order it appeared in the
/// raw model output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RecipeSection {
    /// Recipe title, rendered as a heading
    Title(String),
    /// Ingredient list, rendered as bullets
    Ingredients(Vec<String>),
    /// Preparation steps, rendered as a numbered list
    Directions(Vec<String>),
}

/// A recipe recovered from raw model output, ready for display.
///
/// Sections keep their first-encounter order; duplicated tags in the
/// raw text produce repeated sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedRecipe {
    pub sections: Vec<RecipeSection>,
}

impl FormattedRecipe {
    /// Render the recipe as a Markdown document.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            match section {
                RecipeSection::Title(title) => {
                    out.push_str(&format!("## {}\n\n", title));
                }
                RecipeSection::Ingredients(items) => {
                    out.push_str("### Ingredients\n");
                    for item in items {
                        out.push_str(&format!("- {}\n", item));
                    }
                    out.push('\n');
                }
                RecipeSection::Directions(steps) => {
                    out.push_str("### Instructions\n");
                    for (i, step) in steps.iter().enumerate() {
                        out.push_str(&format!("{}. {}\n", i + 1, step));
                    }
                    out.push('\n');
                }
            }
        }
        out
    }
}

/// A video search hit shown next to a generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub title: String,
    pub url: String,
}
