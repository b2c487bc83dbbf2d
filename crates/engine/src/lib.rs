pub mod api;
pub mod config;
pub mod logging;
pub mod proxy;
pub mod upstream;

pub use config::Config;
pub use proxy::{ChatProxy, ProxyError};
