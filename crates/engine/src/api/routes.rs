use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use super::handlers;
use crate::proxy::ChatProxy;

pub fn create_router() -> Router<Arc<ChatProxy>> {
    Router::new()
        .route("/", get(handlers::health_check))
        // Pasted documents have no size cap
        .route("/api/chat", post(handlers::handle_chat).layer(DefaultBodyLimit::disable()))
}
