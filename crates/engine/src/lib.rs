//! Recommendation engine for matching students to universities.
//!
//! This crate provides:
//! - EligibilityFilter trait and the hard eligibility filters
//! - FilterPipeline for composing filters
//! - MatchScorer for the weighted match score
//! - Match reason generation
//! - Ranking with the adaptive result cap
//!
//! ## Architecture
//! A recommendation runs in stages:
//! 1. Filters remove universities outside the country or clearly out of
//!    reach (budget, grades, language tests)
//! 2. MatchScorer computes five sub-scores and a 0-100 composite
//! 3. Reasons explain the match in a few short phrases
//! 4. Results are stably sorted and capped at 8 or 10
//!
//! Everything here is synchronous, deterministic and infallible.
//!
//! ## Example Usage
//! ```ignore
//! use engine::recommend;
//!
//! let results = recommend("United Kingdom", &profile, catalog.all());
//! for result in &results {
//!     println!("{} - {}%", result.university.name, result.match_score);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod scoring;
pub mod reasons;
pub mod ranking;
pub mod recommender;

// Re-export main types
pub use traits::EligibilityFilter;
pub use filter_pipeline::FilterPipeline;
pub use scoring::{FieldMatch, MatchScorer, ScoreBreakdown, ScoreWeights};
pub use reasons::{MatchReason, match_reasons};
pub use ranking::{ScoredUniversity, rank_and_cap, result_limit};
pub use recommender::{RecommendationEngine, recommend};
pub use profile::normalize_gpa;
