// src/config.rs
// =============================================================================
// Settings for talking to the GitHub API.
//
// The CLI collects raw values (flags or environment variables) and hands them
// to FetchConfig::new, which checks them once so the fetcher can trust them.
// =============================================================================

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repositories requested per listing page (GitHub's maximum)
pub const DEFAULT_PER_PAGE: u32 = 100;

/// How many repositories get their language breakdown fetched
pub const DEFAULT_LANGUAGE_REPO_LIMIT: usize = 20;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API URL '{0}': {1}")]
    InvalidApiUrl(String, String),
    #[error("per-page must be between 1 and 100, got {0}")]
    InvalidPerPage(u32),
    #[error("language limit must be at least 1")]
    InvalidLanguageLimit,
    #[error("timeout must be at least 1 second")]
    InvalidTimeout,
}

/// Validated fetcher settings
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL, e.g. https://api.github.com (a mock server in tests)
    pub api_base: Url,
    pub per_page: u32,
    /// Bounds the language request fan-out
    pub language_repo_limit: usize,
    pub timeout: Duration,
}

impl FetchConfig {
    // Validates raw settings
    //
    // Parameters:
    //   api_url: base URL of the REST API (must be absolute)
    //   per_page: repositories per listing request, 1-100
    //   language_repo_limit: repositories feeding the language totals, >= 1
    //   timeout_secs: per-request timeout, >= 1
    //
    // Returns: a FetchConfig, or the first ConfigError found
    pub fn new(
        api_url: &str,
        per_page: u32,
        language_repo_limit: usize,
        timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        let api_base = Url::parse(api_url)
            .map_err(|e| ConfigError::InvalidApiUrl(api_url.to_string(), e.to_string()))?;

        if api_base.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl(
                api_url.to_string(),
                "not a base URL".to_string(),
            ));
        }
        if !(1..=100).contains(&per_page) {
            return Err(ConfigError::InvalidPerPage(per_page));
        }
        if language_repo_limit == 0 {
            return Err(ConfigError::InvalidLanguageLimit);
        }
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            api_base,
            per_page,
            language_repo_limit,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    // Builds the listing URL for `username`, newest updates first
    //
    // Example:
    //   "octocat" -> https://api.github.com/users/octocat/repos?sort=updated&per_page=100
    pub fn repos_url(&self, username: &str) -> Url {
        let mut url = self.api_base.clone();
        // Segments are percent-encoded, so odd usernames can't break the path
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", username, "repos"]);
        }
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.per_page.to_string());
        url
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_URL).expect("default API URL parses"),
            per_page: DEFAULT_PER_PAGE,
            language_repo_limit: DEFAULT_LANGUAGE_REPO_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
