mod openai;

use async_trait::async_trait;
use citykey_shared::ChatMessage;

pub use openai::OpenAiBackend;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed upstream body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A text-completion service called at most once per inbound request.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// `Ok(None)` means the call succeeded but carried no reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, UpstreamError>;
}
