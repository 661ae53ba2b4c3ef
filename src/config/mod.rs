use anyhow::Result;
use dotenvy::dotenv;
use std::str::FromStr;
use tracing::warn;

use crate::recommend::prompt::MixPolicy;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub mix: MixPolicy,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok(); // Try loading .env file, ignore if it doesn't exist (e.g. env vars set manually)

        // A missing key is not fatal: the provider rejects the call and the
        // user sees the regular fetch-failed screen.
        let api_key = std::env::var("API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .unwrap_or_default();
        if api_key.is_empty() {
            warn!("API_KEY is not set, recommendation requests will be rejected");
        }

        Ok(Config {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            endpoint: std::env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            mix: std::env::var("COMMUTE_BEAT_MIX")
                .map(|raw| parse_mix(&raw))
                .unwrap_or_default(),
        })
    }
}

pub fn parse_mix(raw: &str) -> MixPolicy {
    MixPolicy::from_str(raw.trim()).unwrap_or_else(|_| {
        warn!("Unknown COMMUTE_BEAT_MIX value {raw:?}, using {}", MixPolicy::default());
        MixPolicy::default()
    })
}
