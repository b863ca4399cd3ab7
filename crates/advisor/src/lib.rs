//! Service layer for the Uni-Match recommendation engine.
//!
//! This crate wraps the synchronous engine for interactive use:
//! - `RecommendationService` runs recommendations off the async runtime
//! - `AdvisorConfig` reads settings from the environment
//! - `Favorites` keeps a persisted shortlist of universities
//! - `ComparisonTable` and the format helpers prepare data for display

pub mod comparison;
pub mod config;
pub mod favorites;
pub mod format;
pub mod orchestrator;

pub use comparison::{ComparisonRow, ComparisonTable};
pub use config::{AdvisorConfig, ConfigError};
pub use favorites::{
    FAVORITES_KEY, Favorites, JsonFileStore, KeyValueStore, MemoryStore, StoreError,
};
pub use format::{MatchTier, format_currency};
pub use orchestrator::RecommendationService;
