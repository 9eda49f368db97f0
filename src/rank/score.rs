// src/rank/score.rs
// =============================================================================
// Picks the "featured" repositories shown in the projects section.
//
// Each repository gets a score built from:
//   - stars            5 points each, capped at 50
//   - recent activity  up to 20 points, minus 1 per 30 days since last update
//   - description      10 points if longer than 10 characters
//   - homepage/demo    15 points
//   - topics           5 points if any topic is set
//   - keywords         3 points per listed keyword in name + description
//
// The top FEATURED_LIMIT by score win. Equal scores keep their input order
// (the API already sorts by last update).
//
// `now` is a parameter instead of Utc::now() so the same input always gives
// the same ranking, which is what the tests rely on.
// =============================================================================

use chrono::{DateTime, Utc};

use crate::github::Repository;

/// Never show more than this many featured repositories
pub const FEATURED_LIMIT: usize = 6;

const STAR_POINTS: f64 = 5.0;
const STAR_CAP: f64 = 50.0;
const RECENCY_MAX: f64 = 20.0;
const RECENCY_DAYS_PER_POINT: f64 = 30.0;
const DESCRIPTION_MIN_CHARS: usize = 10;
const DESCRIPTION_POINTS: f64 = 10.0;
const HOMEPAGE_POINTS: f64 = 15.0;
const TOPICS_POINTS: f64 = 5.0;
const KEYWORD_POINTS: f64 = 3.0;

const BONUS_KEYWORDS: [&str; 7] = ["app", "web", "api", "dashboard", "tool", "platform", "system"];

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// A repository with its score, only alive while ranking
#[derive(Debug, Clone)]
pub struct ScoredRepository<'a> {
    pub repo: &'a Repository,
    pub score: f64,
}

// Scores a single repository
//
// Parameters:
//   repo: the repository to score
//   now: the moment "days since last update" is measured from
//
// Returns: the sum of all bonuses, never negative
//
// Example:
//   10 stars + homepage, updated today, no description -> 50 + 20 + 15 = 85
pub fn score_repository(repo: &Repository, now: DateTime<Utc>) -> f64 {
    let mut score = 0.0;

    score += (repo.stargazers_count as f64 * STAR_POINTS).min(STAR_CAP);
    score += recency_bonus(repo.updated_at, now);

    let description = repo.description.as_deref().unwrap_or("");
    if description.chars().count() > DESCRIPTION_MIN_CHARS {
        score += DESCRIPTION_POINTS;
    }

    if repo.homepage.is_some() {
        score += HOMEPAGE_POINTS;
    }

    if !repo.topics.is_empty() {
        score += TOPICS_POINTS;
    }

    score += keyword_bonus(&repo.name, description);

    score
}

// Orders repositories by score and keeps the top FEATURED_LIMIT
//
// Parameters:
//   repos: candidates, in the order the API returned them
//   now: see score_repository
//
// Returns: at most FEATURED_LIMIT clones taken from `repos`, best first
pub fn select_featured(repos: &[Repository], now: DateTime<Utc>) -> Vec<Repository> {
    rank(repos, now)
        .into_iter()
        .take(FEATURED_LIMIT)
        .map(|scored| scored.repo.clone())
        .collect()
}

/// All repositories with their scores, best first.
pub fn rank(repos: &[Repository], now: DateTime<Utc>) -> Vec<ScoredRepository<'_>> {
    let mut scored: Vec<ScoredRepository<'_>> = repos
        .iter()
        .map(|repo| ScoredRepository {
            repo,
            score: score_repository(repo, now),
        })
        .collect();

    // sort_by is stable, so equal scores stay in input order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

fn recency_bonus(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    // A timestamp in the future (clock skew) counts as zero days old
    let elapsed_ms = (now - updated_at).num_milliseconds().max(0) as f64;
    let days = elapsed_ms / MILLIS_PER_DAY;
    (RECENCY_MAX - days / RECENCY_DAYS_PER_POINT).max(0.0)
}

// Uncapped: a repo hitting every keyword gets 21 points
fn keyword_bonus(name: &str, description: &str) -> f64 {
    let text = format!("{} {}", name, description).to_lowercase();
    BONUS_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count() as f64
        * KEYWORD_POINTS
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why f64 scores?
//    - The recency bonus is fractional (a repo 45 days old gets 18.5)
//    - total_cmp gives f64 a total order, so sort_by never sees "incomparable"
//
// 2. Tie-break
//    - Vec::sort_by is a stable sort: equal scores keep their input order
//    - The listing arrives newest-update first, so among equals the most
//      recently touched repository wins
//
// 3. Why borrow in ScoredRepository?
//    - Scores only live during ranking; only the winners get cloned
// -----------------------------------------------------------------------------
