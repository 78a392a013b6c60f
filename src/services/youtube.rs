use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use crate::config::VideoConfig;
use crate::error::ChefError;
use crate::model::Video;
use crate::services::VideoSearch;

/// Client for the YouTube Data API v3 search endpoint.
///
/// Lookups are memoized per query for the configured TTL, and every
/// failure degrades to an empty result list: videos are garnish, they
/// must never block recipe display.
pub struct YouTubeSearch {
    client: Client,
    base_url: String,
    api_key: String,
    cache_ttl: Duration,
    cache: Mutex<HashMap<(String, u32), (Instant, Vec<Video>)>>,
}

impl YouTubeSearch {
    /// Create a search client from configuration. The API key is looked
    /// up in config first, then the YOUTUBE_API_KEY environment variable.
    pub fn new(config: &VideoConfig) -> Result<Self, ChefError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("YOUTUBE_API_KEY").ok())
            .ok_or_else(|| {
                ChefError::Backend("YOUTUBE_API_KEY not found in config or environment".to_string())
            })?;

        Ok(YouTubeSearch {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key,
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            cache: Mutex::new(HashMap::new()),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        YouTubeSearch {
            client: Client::new(),
            base_url,
            api_key,
            cache_ttl: Duration::from_secs(3600),
            cache: Mutex::new(HashMap::new()),
        }
    }

    async fn request(&self, query: &str, max_results: u32) -> Result<Vec<Video>, ChefError> {
        let max_results_param = max_results.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max_results_param.as_str()),
                ("relevanceLanguage", "en"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        if let Some(message) = response_body["error"]["message"].as_str() {
            return Err(ChefError::Backend(message.to_string()));
        }

        let items = response_body["items"].as_array().cloned().unwrap_or_default();
        let videos = items
            .iter()
            .filter_map(|item| {
                let title = item["snippet"]["title"].as_str()?;
                let video_id = item["id"]["videoId"].as_str()?;
                Some(Video {
                    title: title.to_string(),
                    url: format!("https://youtu.be/{}", video_id),
                })
            })
            .take(max_results as usize)
            .collect();

        Ok(videos)
    }

    fn cached(&self, key: &(String, u32)) -> Option<Vec<Video>> {
        // A poisoned cache is treated as a miss; this path must not panic.
        let cache = self.cache.lock().ok()?;
        cache.get(key).and_then(|(fetched_at, videos)| {
            if fetched_at.elapsed() < self.cache_ttl {
                Some(videos.clone())
            } else {
                None
            }
        })
    }

    fn store(&self, key: (String, u32), videos: Vec<Video>) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, (Instant::now(), videos));
        }
    }
}

#[async_trait]
impl VideoSearch for YouTubeSearch {
    async fn search(&self, query: &str, max_results: u32) -> Vec<Video> {
        let key = (query.to_string(), max_results);
        if let Some(videos) = self.cached(&key) {
            debug!("video cache hit for {:?}", query);
            return videos;
        }

        match self.request(query, max_results).await {
            Ok(videos) => {
                self.store(key, videos.clone());
                videos
            }
            Err(e) => {
                warn!("Video search failed for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }
}
