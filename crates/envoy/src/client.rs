use anyhow::Result;
use citykey_shared::{prompt, ChatMessage, ChatRequest, ChatResponse, ErrorBody, Language};

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn chat(
        &self,
        message: String,
        language: Language,
        history: &[ChatMessage],
    ) -> Result<ChatResponse> {
        let request = ChatRequest {
            message,
            language: Some(language.code().to_string()),
            system_prompt: Some(prompt::render_chat_prompt(language)),
            history: Some(history.to_vec()),
        };
        self.send(&request).await
    }

    pub async fn explain_document(&self, document: &str, language: Language) -> Result<ChatResponse> {
        let request = ChatRequest {
            message: prompt::document_message(document),
            language: Some(language.code().to_string()),
            system_prompt: Some(prompt::render_document_prompt(language)),
            history: Some(Vec::new()),
        };
        self.send(&request).await
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/api/chat", self.base_url);

        let response = self.client
            .post(&url)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Failed to get response".to_string());
            return Err(anyhow::anyhow!("{} ({})", message, status));
        }

        let response = response.json::<ChatResponse>().await?;
        Ok(response)
    }
}
