//! Generation request parameters and their builder.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::ChefError;
use crate::ingredients::IngredientSelection;

/// Accepted recipe length, in model tokens.
pub const MAX_LENGTH_RANGE: RangeInclusive<u32> = 100..=500;
/// Accepted sampling temperature.
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.1..=1.0;

pub const DEFAULT_MAX_LENGTH: u32 = 200;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Dietary constraint passed through to the generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietaryRestriction::Vegetarian => write!(f, "Vegetarian"),
            DietaryRestriction::Vegan => write!(f, "Vegan"),
            DietaryRestriction::GlutenFree => write!(f, "Gluten-Free"),
        }
    }
}

impl DietaryRestriction {
    /// Parse a user-supplied name, e.g. from a CLI flag.
    pub fn parse(name: &str) -> Result<Self, ChefError> {
        match name.to_lowercase().as_str() {
            "vegetarian" => Ok(DietaryRestriction::Vegetarian),
            "vegan" => Ok(DietaryRestriction::Vegan),
            "gluten-free" | "glutenfree" => Ok(DietaryRestriction::GlutenFree),
            other => Err(ChefError::InvalidRequest(format!(
                "Unknown dietary restriction: {}",
                other
            ))),
        }
    }
}

/// How adventurous generation should be. Presets pick a temperature when
/// none is given explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    #[default]
    Balanced,
    Creative,
    Precise,
}

impl SamplingMode {
    pub fn temperature(self) -> f32 {
        match self {
            SamplingMode::Balanced => 0.7,
            SamplingMode::Creative => 1.0,
            SamplingMode::Precise => 0.3,
        }
    }

    pub fn parse(name: &str) -> Result<Self, ChefError> {
        match name.to_lowercase().as_str() {
            "balanced" => Ok(SamplingMode::Balanced),
            "creative" => Ok(SamplingMode::Creative),
            "precise" => Ok(SamplingMode::Precise),
            other => Err(ChefError::InvalidRequest(format!(
                "Unknown generation mode: {}",
                other
            ))),
        }
    }
}

/// A validated recipe generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    ingredients: IngredientSelection,
    dietary: Vec<DietaryRestriction>,
    max_length: u32,
    temperature: f32,
}

impl GenerationRequest {
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// The free-text prompt sent to the generation backend: the
    /// stringified restriction list, a space, then the comma-joined
    /// ingredients.
    pub fn prompt(&self) -> String {
        format!("{:?} {}", self.dietary, self.all_ingredients())
    }

    /// Comma-joined ingredient string, also stored in session context
    /// and used for the video query.
    pub fn all_ingredients(&self) -> String {
        self.ingredients.joined()
    }

    /// Query used to look up illustrative cooking videos.
    pub fn video_query(&self) -> String {
        format!("{} recipe", self.all_ingredients())
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

/// Builder for [`GenerationRequest`]; validation happens in
/// [`GenerationRequestBuilder::build`].
#[derive(Debug, Default)]
pub struct GenerationRequestBuilder {
    ingredients: IngredientSelection,
    dietary: Vec<DietaryRestriction>,
    mode: SamplingMode,
    max_length: Option<u32>,
    temperature: Option<f32>,
}

impl GenerationRequestBuilder {
    pub fn ingredients(mut self, selection: IngredientSelection) -> Self {
        self.ingredients = selection;
        self
    }

    pub fn ingredient(mut self, name: &str) -> Self {
        self.ingredients.add(name);
        self
    }

    pub fn dietary(mut self, restriction: DietaryRestriction) -> Self {
        self.dietary.push(restriction);
        self
    }

    /// Sampling preset; ignored when an explicit temperature is set.
    pub fn mode(mut self, mode: SamplingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn build(self) -> Result<GenerationRequest, ChefError> {
        if self.ingredients.is_empty() {
            return Err(ChefError::InvalidRequest(
                "Please select at least one ingredient".to_string(),
            ));
        }

        let max_length = self.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        if !MAX_LENGTH_RANGE.contains(&max_length) {
            return Err(ChefError::InvalidRequest(format!(
                "max_length {} outside {:?}",
                max_length, MAX_LENGTH_RANGE
            )));
        }

        let temperature = self.temperature.unwrap_or_else(|| self.mode.temperature());
        if !TEMPERATURE_RANGE.contains(&temperature) {
            return Err(ChefError::InvalidRequest(format!(
                "temperature {} outside {:?}",
                temperature, TEMPERATURE_RANGE
            )));
        }

        Ok(GenerationRequest {
            ingredients: self.ingredients,
            dietary: self.dietary,
            max_length,
            temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_stringifies_restrictions_before_ingredients() {
        let request = GenerationRequest::builder()
            .ingredient("egg")
            .ingredient("flour")
            .dietary(DietaryRestriction::Vegetarian)
            .build()
            .unwrap();

        assert_eq!(request.prompt(), "[Vegetarian] egg, flour");
    }

    #[test]
    fn test_prompt_with_no_restrictions_keeps_empty_list() {
        let request = GenerationRequest::builder()
            .ingredient("egg")
            .build()
            .unwrap();

        assert_eq!(request.prompt(), "[] egg");
    }

    #[test]
    fn test_video_query_appends_recipe() {
        let request = GenerationRequest::builder()
            .ingredient("egg")
            .ingredient("flour")
            .build()
            .unwrap();

        assert_eq!(request.video_query(), "egg, flour recipe");
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let result = GenerationRequest::builder().build();
        assert!(matches!(result, Err(ChefError::InvalidRequest(_))));
    }

    #[test]
    fn test_defaults() {
        let request = GenerationRequest::builder()
            .ingredient("egg")
            .build()
            .unwrap();

        assert_eq!(request.max_length(), DEFAULT_MAX_LENGTH);
        assert_eq!(request.temperature(), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_mode_presets_apply_without_explicit_temperature() {
        let request = GenerationRequest::builder()
            .ingredient("egg")
            .mode(SamplingMode::Precise)
            .build()
            .unwrap();
        assert_eq!(request.temperature(), 0.3);

        let request = GenerationRequest::builder()
            .ingredient("egg")
            .mode(SamplingMode::Creative)
            .temperature(0.5)
            .build()
            .unwrap();
        // explicit temperature wins over the preset
        assert_eq!(request.temperature(), 0.5);
    }

    #[test]
    fn test_out_of_range_parameters_are_rejected() {
        let too_long = GenerationRequest::builder()
            .ingredient("egg")
            .max_length(501)
            .build();
        assert!(matches!(too_long, Err(ChefError::InvalidRequest(_))));

        let too_cold = GenerationRequest::builder()
            .ingredient("egg")
            .temperature(0.0)
            .build();
        assert!(matches!(too_cold, Err(ChefError::InvalidRequest(_))));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(
            DietaryRestriction::parse("gluten-free").unwrap(),
            DietaryRestriction::GlutenFree
        );
        assert!(DietaryRestriction::parse("carnivore").is_err());
        assert_eq!(SamplingMode::parse("CREATIVE").unwrap(), SamplingMode::Creative);
        assert!(SamplingMode::parse("wild").is_err());
    }
}
