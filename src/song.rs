use serde::{Deserialize, Serialize};

const VIDEO_SEARCH_BASE: &str = "https://www.youtube.com/results?search_query=";

/// One recommended track as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub is_korean: bool,
}

/// Top-level provider payload. `songs` may be absent, which counts as no songs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub songs: Option<Vec<Song>>,
}

impl Song {
    /// Video search for "{artist} {title}".
    pub fn video_search_url(&self) -> String {
        let query = format!("{} {}", self.artist, self.title);
        format!("{VIDEO_SEARCH_BASE}{}", urlencoding::encode(&query))
    }

    /// Country name when the provider gave one, otherwise a domestic/international label.
    pub fn origin_badge(&self) -> String {
        match self.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => country.to_string(),
            _ if self.is_korean => "국내".to_string(),
            _ => "해외".to_string(),
        }
    }
}

/// 1-based, zero-padded rank shown in the card corner.
pub fn rank_label(index: usize) -> String {
    format!("{:02}", index + 1)
}
