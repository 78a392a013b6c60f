//! The generate interaction: prompt the model, format the result,
//! remember it, and fetch videos.

use log::info;

use super::GenerationOutcome;
use crate::error::ChefError;
use crate::format::format_recipe;
use crate::request::GenerationRequest;
use crate::services::{RecipeGenerator, VideoSearch};
use crate::session::Session;

/// Run one generation request against the given backends.
///
/// On backend failure the error propagates and the session is left
/// exactly as it was; context is replaced only after the model has
/// produced a recipe. The video lookup is fail-soft and can only shrink
/// the outcome, never fail it.
pub async fn process(
    request: &GenerationRequest,
    generator: &dyn RecipeGenerator,
    videos: &dyn VideoSearch,
    max_videos: u32,
    session: &mut Session,
) -> Result<GenerationOutcome, ChefError> {
    let raw = generator
        .generate(&request.prompt(), request.max_length(), request.temperature())
        .await?;

    let recipe = format_recipe(&raw);
    if recipe.is_fallback() {
        info!("recipe output had no recognized sections, showing raw text");
    }

    session
        .context
        .record_generation(raw.clone(), request.all_ingredients());

    let videos = videos.search(&request.video_query(), max_videos).await;

    Ok(GenerationOutcome { raw, recipe, videos })
}
