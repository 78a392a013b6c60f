pub mod chat;
pub mod generate;

use crate::format::FormatOutcome;
use crate::model::Video;

/// Everything a successful generation produces for display.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Raw model output, as stored in session context
    pub raw: String,
    /// Formatted recipe, or the raw text when formatting fell back
    pub recipe: FormatOutcome,
    /// Illustrative videos; empty when the lookup failed or found nothing
    pub videos: Vec<Video>,
}
