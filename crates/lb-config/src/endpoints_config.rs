use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_URL, DEFAULT_SCORES_URL,
    DEFAULT_TOP_SCORES_LIMIT, MAX_TOP_SCORES_LIMIT, MIN_TOP_SCORES_LIMIT,
};

use serde::Deserialize;

/// Remote services the widget talks to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Base URL of the scoring service (serves `/highscores/...`)
    pub scores_url: String,
    /// Base URL of the identity service (serves `/logout`)
    pub auth_url: String,
    /// Rows requested for the top-scores table
    pub top_scores_limit: u32,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            scores_url: String::from(DEFAULT_SCORES_URL),
            auth_url: String::from(DEFAULT_AUTH_URL),
            top_scores_limit: DEFAULT_TOP_SCORES_LIMIT,
        }
    }
}

impl EndpointsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_url("endpoints.scores_url", &self.scores_url)?;
        Self::validate_url("endpoints.auth_url", &self.auth_url)?;

        if self.top_scores_limit < MIN_TOP_SCORES_LIMIT
            || self.top_scores_limit > MAX_TOP_SCORES_LIMIT
        {
            return Err(ConfigError::endpoint(format!(
                "endpoints.top_scores_limit must be {}-{}, got {}",
                MIN_TOP_SCORES_LIMIT, MAX_TOP_SCORES_LIMIT, self.top_scores_limit
            )));
        }

        Ok(())
    }

    fn validate_url(name: &str, url: &str) -> ConfigErrorResult<()> {
        if url.trim().is_empty() {
            return Err(ConfigError::endpoint(format!("{} must not be empty", name)));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::endpoint(format!(
                "{} must be an http(s) URL, got {}",
                name, url
            )));
        }

        Ok(())
    }
}
