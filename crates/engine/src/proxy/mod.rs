//! Chat proxy.
//!
//! Forwards a chat turn to the completion backend. When no credential is
//! configured, or the upstream call fails, it answers with canned text
//! instead. An upstream reply without text is the one hard failure.

pub mod demo;

use std::sync::Arc;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};
use citykey_shared::{prompt, ChatMessage, ChatRequest, ChatResponse, ErrorBody, Language};

use crate::config::Config;
use crate::upstream::{CompletionBackend, OpenAiBackend};
pub use demo::DemoResponses;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Message is required")]
    Validation,

    #[error("No response from AI")]
    UpstreamEmptyReply,

    /// The cause is logged, never returned to the caller.
    #[error("Internal server error")]
    Internal(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Validation => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamEmptyReply | ProxyError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        if let ProxyError::Internal(cause) = &self {
            error!(%cause, "Chat API error");
        }

        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

pub struct ChatProxy {
    backend: Option<Arc<dyn CompletionBackend>>,
    demo: DemoResponses,
}

impl ChatProxy {
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>, demo: DemoResponses) -> Self {
        Self { backend, demo }
    }

    pub fn from_config(config: &Config) -> Self {
        let backend = config.upstream.clone().map(|upstream| {
            info!(model = %upstream.model, base_url = %upstream.base_url, "Upstream completions enabled");
            Arc::new(OpenAiBackend::new(upstream)) as Arc<dyn CompletionBackend>
        });

        if backend.is_none() {
            info!("No OpenAI API key configured, chat runs in demo mode");
        }

        Self::new(backend, DemoResponses::builtin())
    }

    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse, ProxyError> {
        if request.message.is_empty() {
            return Err(ProxyError::Validation);
        }

        let language = Language::resolve(request.language.as_deref());

        let Some(backend) = &self.backend else {
            info!(%language, "No upstream credential, using demo mode");
            return Ok(self.demo_reply(&request.message, language));
        };

        let messages = build_messages(&request, language);

        match backend.complete(&messages).await {
            Ok(Some(reply)) => Ok(ChatResponse::live(reply)),
            Ok(None) => {
                warn!("Upstream reply carried no message content");
                Err(ProxyError::UpstreamEmptyReply)
            }
            Err(e) => {
                error!(error = %e, "Upstream completion failed, falling back to demo mode");
                Ok(self.demo_reply(&request.message, language))
            }
        }
    }

    fn demo_reply(&self, message: &str, language: Language) -> ChatResponse {
        ChatResponse::demo(self.demo.select(message, language).to_string())
    }
}

/// System prompt, then history oldest first, then the new user turn.
pub fn build_messages(request: &ChatRequest, language: Language) -> Vec<ChatMessage> {
    let system_prompt = request
        .system_prompt
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| prompt::render_chat_prompt(language));

    let history = request.history.as_deref().unwrap_or_default();

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history.iter().cloned());
    messages.push(ChatMessage::user(request.message.clone()));
    messages
}
