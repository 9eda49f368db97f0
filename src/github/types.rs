// src/github/types.rs
// =============================================================================
// Data types for what the GitHub REST API gives us.
//
// - Repository: one entry of GET /users/{user}/repos
// - LanguageStats: language name -> bytes (GET {languages_url})
// - FeaturedRepository: a top-ranked repository plus its own language bytes
// - GitHubData: everything one load produces, handed to the mapping code
//
// Nothing here is persisted. Every run builds these fresh and drops them.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Language name -> cumulative byte count.
///
/// Bytes are `u64`, so the "never negative" rule comes for free.
pub type LanguageStats = HashMap<String, u64>;

/// A public repository as returned by the listing endpoint.
///
/// Only the fields we use are declared; serde ignores the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub languages_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub html_url: String,
    /// GitHub sends `""` as often as `null` when no homepage is set
    #[serde(default, deserialize_with = "empty_as_none")]
    pub homepage: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub private: bool,
}

impl Repository {
    /// Forks and archived repositories never show up in a portfolio.
    pub fn is_original(&self) -> bool {
        !self.fork && !self.archived
    }
}

/// A featured repository together with its own language breakdown.
///
/// `detailed_languages` is empty when that repository's language call failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedRepository {
    #[serde(flatten)]
    pub repo: Repository,
    pub detailed_languages: LanguageStats,
}

/// The result of one full load for an account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GitHubData {
    pub repos: Vec<Repository>,
    pub featured_repos: Vec<FeaturedRepository>,
    pub languages: LanguageStats,
    pub total_stars: u64,
    pub total_repos: usize,
}

impl GitHubData {
    /// Sum of all aggregated language bytes.
    pub fn total_language_bytes(&self) -> u64 {
        self.languages.values().sum()
    }
}

// Treats a missing, null or empty string as None
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Builds a plain repository for tests; callers tweak the fields they care about.
    pub(crate) fn repo(id: u64, name: &str) -> Repository {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Repository {
            id,
            name: name.to_string(),
            description: None,
            language: None,
            languages_url: format!("https://api.github.com/repos/octo/{}/languages", name),
            stargazers_count: 0,
            forks_count: 0,
            html_url: format!("https://github.com/octo/{}", name),
            homepage: None,
            topics: Vec::new(),
            created_at: ts,
            updated_at: ts,
            fork: false,
            archived: false,
            private: false,
        }
    }

    #[test]
    fn test_deserialize_listing_entry() {
        let json = r#"{
            "id": 42,
            "name": "weather-app",
            "description": "Forecasts in the terminal",
            "language": "Rust",
            "languages_url": "https://api.github.com/repos/octo/weather-app/languages",
            "stargazers_count": 7,
            "forks_count": 1,
            "html_url": "https://github.com/octo/weather-app",
            "homepage": "",
            "topics": ["cli", "weather"],
            "created_at": "2023-03-01T10:00:00Z",
            "updated_at": "2024-05-02T12:30:00Z",
            "fork": false,
            "archived": false,
            "private": false,
            "owner": { "login": "octo" }
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 42);
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.homepage, None);
        assert_eq!(repo.topics, vec!["cli", "weather"]);
        assert!(repo.is_original());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": 1,
            "name": "dotfiles",
            "description": null,
            "languages_url": "https://api.github.com/repos/octo/dotfiles/languages",
            "html_url": "https://github.com/octo/dotfiles",
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2020-01-02T00:00:00Z",
            "archived": true
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.description, None);
        assert_eq!(repo.stargazers_count, 0);
        assert!(repo.topics.is_empty());
        assert!(!repo.is_original());
    }

    #[test]
    fn test_whitespace_strings_are_kept() {
        let json = r#"{
            "id": 2,
            "name": "blank",
            "description": "           ",
            "languages_url": "https://api.github.com/repos/octo/blank/languages",
            "html_url": "https://github.com/octo/blank",
            "homepage": "   ",
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2020-01-02T00:00:00Z"
        }"#;

        // Only "" counts as unset; anything else is scored as sent
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.homepage.as_deref(), Some("   "));
        assert_eq!(repo.description.as_deref(), Some("           "));
    }

    #[test]
    fn test_total_language_bytes() {
        let mut data = GitHubData::default();
        data.languages.insert("Rust".to_string(), 300);
        data.languages.insert("Shell".to_string(), 20);
        assert_eq!(data.total_language_bytes(), 320);
    }
}
