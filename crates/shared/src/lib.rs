pub mod catalog;
pub mod checklist;
pub mod db;
pub mod language;
pub mod prompt;
pub mod types;

pub use catalog::Catalog;
pub use checklist::{Checklist, Storage};
pub use db::Db;
pub use language::Language;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ErrorBody, Role};
