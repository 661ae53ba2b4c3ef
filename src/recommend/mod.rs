pub mod prompt;

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::RecommendError;
use crate::gemini::GeminiClient;
use crate::song::{RecommendationResponse, Song};
use self::prompt::{build_prompt, response_schema, MixPolicy};

/// Anything that can turn a theme into a list of songs.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(&self, theme: &str) -> Result<Vec<Song>, RecommendError>;
}

pub struct Recommender {
    client: GeminiClient,
    mix: MixPolicy,
}

impl Recommender {
    pub fn new(client: GeminiClient, mix: MixPolicy) -> Self {
        Recommender { client, mix }
    }
}

#[async_trait]
impl RecommendationProvider for Recommender {
    async fn recommend(&self, theme: &str) -> Result<Vec<Song>, RecommendError> {
        info!("Requesting recommendations ({} mix)", self.mix);
        let prompt = build_prompt(theme, self.mix);
        let text = self
            .client
            .generate_json(&prompt, response_schema(self.mix))
            .await?;
        parse_songs(&text)
    }
}

/// Parses the provider's JSON text. A payload without `songs` yields no songs.
pub fn parse_songs(text: &str) -> Result<Vec<Song>, RecommendError> {
    let text = if text.trim().is_empty() { "{}" } else { text };
    match serde_json::from_str::<RecommendationResponse>(text) {
        Ok(resp) => Ok(resp.songs.unwrap_or_default()),
        Err(e) => {
            error!("Failed to parse Gemini response: {e}");
            Err(RecommendError::MalformedPayload(e))
        }
    }
}
