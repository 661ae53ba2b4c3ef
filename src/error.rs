use thiserror::Error;

/// Everything that can go wrong while asking the provider for songs.
///
/// The variants only matter for the log file. The UI collapses all of them
/// into [`crate::app::state::FETCH_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("provider payload did not match the song schema: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
