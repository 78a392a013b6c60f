use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Recipe generation backend settings
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Cooking assistant backend settings
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Video search settings
    #[serde(default)]
    pub videos: VideoConfig,
    /// Path to the ingredient catalog file
    #[serde(default = "default_catalog_path")]
    pub catalog: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            generation: GenerationConfig::default(),
            assistant: AssistantConfig::default(),
            videos: VideoConfig::default(),
            catalog: default_catalog_path(),
        }
    }
}

/// Settings for the hosted recipe generation model
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Base URL of the inference endpoint
    #[serde(default = "default_generation_base_url")]
    pub base_url: String,
    /// Model identifier served by the endpoint
    #[serde(default = "default_generation_model")]
    pub model: String,
    /// API token (can also be set via HF_API_TOKEN)
    pub api_token: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            base_url: default_generation_base_url(),
            model: default_generation_model(),
            api_token: None,
        }
    }
}

/// Settings for the conversational assistant backend
#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Base URL of the generative-language API
    #[serde(default = "default_assistant_base_url")]
    pub base_url: String,
    /// Model identifier (e.g. "gemini-1.5-flash")
    #[serde(default = "default_assistant_model")]
    pub model: String,
    /// API key (can also be set via GEMINI_API_KEY)
    pub api_key: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        AssistantConfig {
            base_url: default_assistant_base_url(),
            model: default_assistant_model(),
            api_key: None,
        }
    }
}

/// Settings for the video search service
#[derive(Debug, Deserialize, Clone)]
pub struct VideoConfig {
    /// Base URL of the search API
    #[serde(default = "default_videos_base_url")]
    pub base_url: String,
    /// API key (can also be set via YOUTUBE_API_KEY)
    pub api_key: Option<String>,
    /// Maximum number of videos fetched per recipe
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// How long search results are memoized, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            base_url: default_videos_base_url(),
            api_key: None,
            max_results: default_max_results(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

// Default value functions
fn default_catalog_path() -> String {
    "ingredients.json".to_string()
}

fn default_generation_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_generation_model() -> String {
    "flax-community/t5-recipe-generation".to_string()
}

fn default_assistant_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_assistant_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_videos_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_max_results() -> u32 {
    3
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to
    /// lowest):
    /// 1. Environment variables with CHEFAI__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CHEFAI__ASSISTANT__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: CHEFAI__VIDEOS__MAX_RESULTS
            .add_source(
                Environment::with_prefix("CHEFAI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
