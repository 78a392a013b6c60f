mod gemini;
mod generation;
mod youtube;

pub use gemini::GeminiBackend;
pub use generation::HostedGenerator;
pub use youtube::YouTubeSearch;

use async_trait::async_trait;

use crate::error::ChefError;
use crate::model::Video;

/// Backend that turns an ingredient prompt into raw recipe text.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Get the backend name (e.g. "huggingface")
    fn backend_name(&self) -> &str;

    /// Generate raw recipe text for an ingredient prompt.
    async fn generate(
        &self,
        prompt: &str,
        max_length: u32,
        temperature: f32,
    ) -> Result<String, ChefError>;
}

/// Backend that answers free-form assistant prompts.
#[async_trait]
pub trait ConversationBackend: Send + Sync {
    /// Get the backend name (e.g. "gemini")
    fn backend_name(&self) -> &str;

    async fn reply(&self, prompt: &str) -> Result<String, ChefError>;
}

/// Video lookup for a generated recipe. Fail-soft by contract: errors
/// surface as an empty result list, never as an `Err`.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &str, max_results: u32) -> Vec<Video>;
}
