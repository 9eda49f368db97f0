// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Listing an account's public repositories (newest updates first)
// - Summing per-repository language bytes into one LanguageStats map
// - Picking featured repositories and fetching their own language bytes
//
// No authentication token is sent, so GitHub's anonymous rate limit applies.
// =============================================================================

mod fetch;
pub(crate) mod types;

pub use fetch::{build_client, fetch_github_data, FetchError};
pub use types::{FeaturedRepository, GitHubData, LanguageStats, Repository};
