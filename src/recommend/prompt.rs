use serde_json::{json, Value};

/// Number of songs the provider is told to return. Not checked on the way back.
pub const SONG_COUNT: usize = 7;

/// Domestic/international split requested from the provider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum MixPolicy {
    /// 2-3 Korean songs in a globally diverse seven, each tagged with its country.
    #[default]
    Global,
    /// 5 Korean songs plus 2 international ones, no country field.
    KoreanFocus,
}

impl MixPolicy {
    pub fn requires_country(self) -> bool {
        matches!(self, MixPolicy::Global)
    }

    fn constraints(self) -> &'static [&'static str] {
        match self {
            MixPolicy::Global => &[
                "Pick songs from a globally diverse range of countries (e.g. USA, UK, Japan, France, Brazil).",
                "Include 2 or 3 Korean songs (K-Pop, K-Indie, K-OST, etc.) among them.",
                "For each song, give its country of origin and set isKorean accordingly.",
                "For each song, explain briefly why it's good for a commute in Korean.",
            ],
            MixPolicy::KoreanFocus => &[
                "5 songs must be Korean songs (K-Pop, K-Indie, K-OST, etc.).",
                "2 songs must be International songs.",
                "For each song, explain briefly why it's good for a commute in Korean.",
            ],
        }
    }
}

pub fn build_prompt(theme: &str, policy: MixPolicy) -> String {
    let mut prompt = format!(
        "Recommend exactly {SONG_COUNT} songs for a subway or bus commute based on this theme/genre: \"{theme}\"."
    );
    for (i, rule) in policy.constraints().iter().enumerate() {
        prompt.push_str(&format!("\nConstraint {}: {rule}", i + 1));
    }
    prompt
}

/// Gemini `responseSchema` for the song payload.
pub fn response_schema(policy: MixPolicy) -> Value {
    let mut properties = json!({
        "title": { "type": "STRING" },
        "artist": { "type": "STRING" },
        "reason": { "type": "STRING" },
        "isKorean": { "type": "BOOLEAN" },
    });
    let mut required = vec!["title", "artist", "reason"];

    if policy.requires_country() {
        properties["country"] = json!({ "type": "STRING" });
        required.push("country");
    }
    required.push("isKorean");

    json!({
        "type": "OBJECT",
        "properties": {
            "songs": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": properties,
                    "required": required,
                }
            }
        },
        "required": ["songs"],
    })
}
