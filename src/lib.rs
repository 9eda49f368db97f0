// src/lib.rs
// =============================================================================
// portfolio-stats: GitHub account -> portfolio data.
//
// Data flows one way:
//   github (fetch listing + languages) -> rank (pick featured) -> mapping
//   (categories, tech stacks, skill levels)
//
// The binary in main.rs is a thin printer on top of these modules.
// =============================================================================

pub mod config;
pub mod github;
pub mod mapping;
pub mod rank;
