//! # Recommendation Service
//!
//! Coordinates a recommendation request end to end:
//! 1. Wait out the configured latency (if any)
//! 2. Run the engine on the blocking thread pool
//! 3. Log result counts and timing
//!
//! The engine itself is synchronous and CPU-bound, so it never runs on the
//! async worker threads. Dropping the returned future before the latency
//! elapses discards the request without running the engine.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use catalog::{Catalog, University};
use engine::{RecommendationEngine, ScoreBreakdown, ScoredUniversity};
use profile::StudentProfile;

use crate::config::AdvisorConfig;

/// Async front door to the engine over a shared catalog
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    engine: RecommendationEngine,
    latency: Duration,
}

impl RecommendationService {
    /// Create a service with no artificial latency
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            engine: RecommendationEngine::new(),
            latency: Duration::ZERO,
        }
    }

    /// Load the configured catalog file and apply the configured latency
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        let start = Instant::now();
        let catalog = Catalog::load_from_file(&config.catalog_path).with_context(|| {
            format!("Failed to load catalog from {}", config.catalog_path.display())
        })?;
        info!(
            "Catalog ready: {} universities in {} countries ({:.2?})",
            catalog.len(),
            catalog.countries().len(),
            start.elapsed()
        );

        Ok(Self::new(Arc::new(catalog)).with_latency(config.latency))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Countries present in the catalog, sorted
    pub fn countries(&self) -> Vec<String> {
        self.catalog.countries().into_iter().map(str::to_string).collect()
    }

    pub fn university(&self, id: &str) -> Option<&University> {
        self.catalog.get(id)
    }

    /// Main entry point: ranked recommendations for one student and country.
    pub async fn recommend(
        &self,
        country: &str,
        profile: &StudentProfile,
    ) -> Result<Vec<ScoredUniversity>> {
        let start_time = Instant::now();

        if !self.latency.is_zero() {
            debug!("Waiting {:?} before recommending", self.latency);
            tokio::time::sleep(self.latency).await;
        }

        let results = tokio::task::spawn_blocking({
            let catalog = self.catalog.clone();
            let engine = self.engine.clone();
            let country = country.to_string();
            let profile = profile.clone();
            move || engine.recommend(&country, &profile, catalog.all())
        })
        .await
        .context("Recommendation task panicked")?;

        info!(
            "Recommended {} universities in {} ({:.2?})",
            results.len(),
            country,
            start_time.elapsed()
        );
        Ok(results)
    }

    /// Match score and reasons for one university, without eligibility
    /// filtering. Used when the student picks universities to compare.
    pub fn score(&self, id: &str, profile: &StudentProfile) -> Option<ScoredUniversity> {
        self.catalog
            .get(id)
            .map(|university| self.engine.score(university, profile))
    }

    /// Sub-scores for one university, if it exists
    pub fn explain(&self, id: &str, profile: &StudentProfile) -> Option<ScoreBreakdown> {
        self.catalog
            .get(id)
            .map(|university| self.engine.explain(university, profile))
    }
}
