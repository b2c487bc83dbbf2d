use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Json, State},
};
use serde_json::Value;
use std::sync::Arc;
use citykey_shared::{ChatRequest, ChatResponse};

use crate::proxy::{ChatProxy, ProxyError};

pub async fn handle_chat(
    State(proxy): State<Arc<ChatProxy>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, ProxyError> {
    let body = body.map_err(|e| ProxyError::Internal(format!("Unreadable request body: {}", e)))?;
    let request = parse_chat_request(&body)?;
    let response = proxy.handle(request).await?;
    Ok(Json(response))
}

/// A missing `message` is a validation failure whatever else the body holds;
/// any other unreadable body is an internal error.
fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, ProxyError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ProxyError::Internal(format!("Invalid JSON body: {}", e)))?;

    let has_message = value
        .get("message")
        .and_then(Value::as_str)
        .is_some_and(|m| !m.is_empty());

    if !has_message {
        return Err(ProxyError::Validation);
    }

    serde_json::from_value(value)
        .map_err(|e| ProxyError::Internal(format!("Invalid chat request: {}", e)))
}

pub async fn health_check() -> &'static str {
    "CityKey is running"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_wins_over_shape_errors() {
        for body in [r#"{}"#, r#"{"message": ""}"#, r#"{"message": 7}"#, r#"{"history": "nope"}"#, "[]"] {
            let err = parse_chat_request(body.as_bytes()).unwrap_err();
            assert!(matches!(err, ProxyError::Validation), "{body}");
        }
    }

    #[test]
    fn unreadable_bodies_are_internal() {
        for body in ["", "{", r#"{"message": "hi", "history": "nope"}"#] {
            let err = parse_chat_request(body.as_bytes()).unwrap_err();
            assert!(matches!(err, ProxyError::Internal(_)), "{body}");
        }
    }

    #[test]
    fn parses_full_request() {
        let req = parse_chat_request(
            br#"{"message":"hi","language":"fr","systemPrompt":"p","history":[{"role":"user","content":"a"}]}"#,
        )
        .unwrap();
        assert_eq!(req.message, "hi");
        assert_eq!(req.language.as_deref(), Some("fr"));
        assert_eq!(req.history.map(|h| h.len()), Some(1));
    }
}
