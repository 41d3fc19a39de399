//! Runtime configuration, read once by the entry point and passed down.

use crate::domain::values::retry_policy::RetryPolicy;
use crate::infrastructure::feeds::coingecko;
use crate::infrastructure::llm::openai;
use std::time::Duration;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "COINSIGHT_MODEL";
pub const PRICE_API_URL_VAR: &str = "COINSIGHT_PRICE_API_URL";
pub const COMPLETION_URL_VAR: &str = "COINSIGHT_COMPLETION_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Completion API credential. `None` disables the narrative step.
    pub openai_api_key: Option<String>,
    pub model: String,
    pub price_api_url: String,
    pub completion_url: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: openai::DEFAULT_MODEL.to_string(),
            price_api_url: coingecko::DEFAULT_BASE_URL.to_string(),
            completion_url: openai::DEFAULT_ENDPOINT.to_string(),
            temperature: 0.5,
            max_tokens: 300,
            request_timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Defaults overlaid with whatever the process environment sets.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            openai_api_key: get(API_KEY_VAR),
            model: get(MODEL_VAR).unwrap_or(defaults.model),
            price_api_url: get(PRICE_API_URL_VAR).unwrap_or(defaults.price_api_url),
            completion_url: get(COMPLETION_URL_VAR).unwrap_or(defaults.completion_url),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup(&[]));
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.price_api_url, "https://api.coingecko.com/api/v3");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.retry.max_attempts(), 2);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-abc"),
            ("COINSIGHT_MODEL", "gpt-4o-mini"),
            ("COINSIGHT_PRICE_API_URL", "http://localhost:8080"),
        ]));
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-abc"));
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.price_api_url, "http://localhost:8080");
        assert_eq!(config.completion_url, openai::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_blank_key_is_unset() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "   ")]));
        assert!(config.openai_api_key.is_none());
    }
}
