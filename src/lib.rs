//! Ingredient-driven recipe generation with a cooking assistant.
//!
//! The crate has two pure cores: [`format::format_recipe`], which turns
//! loosely tagged model output into displayable sections, and
//! [`assistant::build_prompt`], which picks and fills a prompt template
//! from the user's question and the stored recipe context. They are
//! wired to three hosted backends (recipe generation, a
//! generative-language assistant, and video search) through the
//! interaction pipelines in [`pipelines`].

pub mod assistant;
pub mod config;
pub mod error;
pub mod format;
pub mod ingredients;
pub mod model;
pub mod pipelines;
pub mod request;
pub mod services;
pub mod session;

pub use assistant::{build_prompt, Intent};
pub use config::AppConfig;
pub use error::ChefError;
pub use format::{format_recipe, FormatOutcome};
pub use ingredients::{IngredientCatalog, IngredientSelection};
pub use model::{FormattedRecipe, RecipeSection, Video};
pub use pipelines::GenerationOutcome;
pub use request::{DietaryRestriction, GenerationRequest, SamplingMode};
pub use services::{
    ConversationBackend, GeminiBackend, HostedGenerator, RecipeGenerator, VideoSearch,
    YouTubeSearch,
};
pub use session::{ConversationLog, ConversationTurn, Role, Session, SessionContext};
