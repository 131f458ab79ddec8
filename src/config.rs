use std::env;
use std::time::Duration;

/// Environment variable holding the LLM API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Hard cap on a single classification request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// A missing or blank credential is a valid state, not an error: the
    /// classifier runs unconfigured and answers with defaults.
    pub fn load() -> Self {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self { api_key }
    }
}
