use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

// Chat endpoint
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ChatMessage>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub demo: bool,
}

impl ChatResponse {
    pub fn live(response: String) -> Self {
        Self { response, demo: false }
    }

    pub fn demo(response: String) -> Self {
        Self { response, demo: true }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case_and_optional_fields() {
        let req: ChatRequest = serde_json::from_value(json!({
            "message": "hi",
            "systemPrompt": "be nice",
            "history": [{ "role": "assistant", "content": "hello" }]
        }))
        .unwrap();

        assert_eq!(req.message, "hi");
        assert_eq!(req.system_prompt.as_deref(), Some("be nice"));
        assert_eq!(req.language, None);
        assert_eq!(req.history.unwrap(), vec![ChatMessage::assistant("hello")]);
    }

    #[test]
    fn demo_flag_is_omitted_for_live_replies() {
        let live = serde_json::to_value(ChatResponse::live("ok".into())).unwrap();
        assert_eq!(live, json!({ "response": "ok" }));

        let demo = serde_json::to_value(ChatResponse::demo("canned".into())).unwrap();
        assert_eq!(demo, json!({ "response": "canned", "demo": true }));
    }
}
