// src/rank/mod.rs
// =============================================================================
// Ranking of repositories for the featured-projects section.
//
// Pure functions only: no network, no clock reads. The caller passes `now`.
// =============================================================================

mod score;

pub use score::{rank, score_repository, select_featured, ScoredRepository, FEATURED_LIMIT};
