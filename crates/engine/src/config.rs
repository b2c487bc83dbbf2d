use std::net::SocketAddr;
use anyhow::{Context, Result};

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind: SocketAddr,
    pub upstream: Option<UpstreamConfig>,
}

/// Present only when a credential is configured.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = non_empty("CITYKEY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw
            .parse()
            .with_context(|| format!("Invalid CITYKEY_BIND address '{}'", bind_raw))?;

        let upstream = non_empty("OPENAI_API_KEY").map(|api_key| UpstreamConfig {
            api_key,
            base_url: non_empty("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        });

        Ok(Self { bind, upstream })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_credential() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert!(config.upstream.is_none());
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(config.upstream.is_none());
    }

    #[test]
    fn credential_enables_upstream_with_fixed_sampling() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1/"),
        ])
        .unwrap();

        let upstream = config.upstream.unwrap();
        assert_eq!(upstream.api_key, "sk-test");
        assert_eq!(upstream.base_url, "http://localhost:9000/v1");
        assert_eq!(upstream.model, DEFAULT_MODEL);
        assert_eq!(upstream.temperature, TEMPERATURE);
        assert_eq!(upstream.max_tokens, MAX_TOKENS);
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(config_from(&[("CITYKEY_BIND", "not-an-address")]).is_err());
    }
}
