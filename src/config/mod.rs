//! Configuration module for the Ideaboard client core.
//!
//! All configuration is loaded from environment variables with sensible
//! defaults. Only the HTTP remote store consumes this; the workflow objects
//! take their collaborators by injection.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted remote store's REST endpoint
    pub api_url: String,
    /// API key sent with every remote store request
    pub api_key: Option<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("IDEABOARD_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:54321/rest/v1".to_string());

        let api_key = env::var("IDEABOARD_API_KEY").ok();

        let log_level = env::var("IDEABOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            api_key,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("IDEABOARD_API_URL");
        env::remove_var("IDEABOARD_API_KEY");
        env::remove_var("IDEABOARD_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.api_url, "http://127.0.0.1:54321/rest/v1");
        assert!(config.api_key.is_none());
        assert_eq!(config.log_level, "info");
    }
}
