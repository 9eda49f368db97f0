// src/github/fetch.rs
// =============================================================================
// This module loads an account's repositories and language stats from GitHub.
//
// Strategy:
// - One request for the repository listing (sorted by last update)
// - Drop forks and archived repositories
// - Rank what is left to pick the featured repositories
// - Fan out one request per repository to its languages_url:
//     * the first `language_repo_limit` repositories feed the aggregate
//     * every featured repository gets its own breakdown
// - Merge the partial language maps only once the whole batch is done
//
// Failure policy:
// - Empty username or a failing listing call fails the whole load
// - A failing languages call only loses that repository's numbers
// =============================================================================

use chrono::Utc;
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::{FeaturedRepository, GitHubData, LanguageStats, Repository};
use crate::config::FetchConfig;
use crate::rank::select_featured;

// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Errors that fail a whole load
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No username provided")]
    MissingUsername,

    #[error("GitHub API error: {}", .status.as_u16())]
    Api { status: StatusCode },

    #[error("Failed to reach GitHub: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Builds the HTTP client shared by every request of a load.
pub fn build_client(config: &FetchConfig) -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Loads everything the portfolio needs for `username`.
///
/// The languages map reflects a complete batch: it is only assembled after
/// every languages request has either answered or failed.
pub async fn fetch_github_data(
    client: &Client,
    config: &FetchConfig,
    username: &str,
) -> Result<GitHubData, FetchError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(FetchError::MissingUsername);
    }

    let repos = fetch_repositories(client, config, username).await?;

    let original: Vec<Repository> = repos.into_iter().filter(Repository::is_original).collect();
    info!(
        username,
        repositories = original.len(),
        "listed original repositories"
    );

    let total_stars = original.iter().map(|repo| repo.stargazers_count).sum();
    let featured = select_featured(&original, Utc::now());

    let language_sample = &original[..original.len().min(config.language_repo_limit)];
    let (languages, featured_repos) = tokio::join!(
        aggregate_languages(client, language_sample),
        fetch_featured_languages(client, featured),
    );

    Ok(GitHubData {
        total_repos: original.len(),
        repos: original,
        featured_repos,
        languages,
        total_stars,
    })
}

// GET /users/{username}/repos?sort=updated&per_page=N
async fn fetch_repositories(
    client: &Client,
    config: &FetchConfig,
    username: &str,
) -> Result<Vec<Repository>, FetchError> {
    let url = config.repos_url(username);
    debug!(%url, "fetching repository listing");

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Api { status });
    }

    Ok(response.json().await?)
}

// Fetches one languages map per repository and sums them.
async fn aggregate_languages(client: &Client, repos: &[Repository]) -> LanguageStats {
    if repos.is_empty() {
        return LanguageStats::new();
    }

    let partials: Vec<Option<LanguageStats>> = stream::iter(repos)
        .map(|repo| async move { languages_or_warn(client, repo).await })
        .buffer_unordered(repos.len())
        .collect()
        .await;

    merge_language_stats(partials.into_iter().flatten())
}

// Same fan-out for the featured list, but order is kept and a failure
// leaves that repository with an empty breakdown.
async fn fetch_featured_languages(
    client: &Client,
    featured: Vec<Repository>,
) -> Vec<FeaturedRepository> {
    let breakdowns = join_all(featured.iter().map(|repo| languages_or_warn(client, repo))).await;

    featured
        .into_iter()
        .zip(breakdowns)
        .map(|(repo, languages)| FeaturedRepository {
            repo,
            detailed_languages: languages.unwrap_or_default(),
        })
        .collect()
}

async fn languages_or_warn(client: &Client, repo: &Repository) -> Option<LanguageStats> {
    match fetch_languages(client, &repo.languages_url).await {
        Ok(languages) => Some(languages),
        Err(e) => {
            warn!(repo = %repo.name, error = %e, "failed to fetch languages");
            None
        }
    }
}

// GET {languages_url} -> { "Rust": 12345, "Shell": 678 }
async fn fetch_languages(client: &Client, url: &str) -> Result<LanguageStats, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Api { status });
    }
    Ok(response.json().await?)
}

/// Sums language byte counts across repositories.
pub fn merge_language_stats<I>(partials: I) -> LanguageStats
where
    I: IntoIterator<Item = LanguageStats>,
{
    let mut total = LanguageStats::new();
    for partial in partials {
        for (language, bytes) in partial {
            let entry = total.entry(language).or_insert(0);
            *entry = entry.saturating_add(bytes);
        }
    }
    total
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. buffer_unordered vs join_all
//    - The aggregate doesn't care about order, so results are taken as they
//      finish (buffer_unordered)
//    - The featured list must stay in rank order, so join_all is used there:
//      it returns results in the same order as its inputs
//
// 2. Why merge after collecting?
//    - Each request builds its own LanguageStats; nothing shared is written
//      while requests are in flight, so no Mutex is needed
//
// 3. Why tokio::join! for the two batches?
//    - Both only need the listing, so they run side by side
// -----------------------------------------------------------------------------
