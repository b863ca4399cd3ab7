//! The recommendation engine: filter, score, explain, rank.

use crate::filter_pipeline::FilterPipeline;
use crate::ranking::{ScoredUniversity, rank_and_cap};
use crate::reasons::match_reasons;
use crate::scoring::{MatchScorer, ScoreBreakdown, ScoreWeights};
use catalog::University;
use profile::StudentProfile;
use tracing::debug;

/// Pure, deterministic matcher of one profile against a catalog.
///
/// ## Pipeline
/// 1. Keep universities in the requested country
/// 2. Drop universities failing budget, academic or language floors
/// 3. Score the survivors (in parallel, order preserved)
/// 4. Attach match reasons
/// 5. Stable sort by score and apply the adaptive 8/10 cap
///
/// The engine holds no state between calls. Input records are cloned into
/// the results and never modified.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    scorer: MatchScorer,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self {
            scorer: MatchScorer::new(weights),
        }
    }

    /// Ranked recommendations for `profile` in `country`.
    ///
    /// An empty catalog, an unknown country or a profile that fails every
    /// eligibility rule all produce an empty list.
    pub fn recommend(
        &self,
        country: &str,
        profile: &StudentProfile,
        catalog: &[University],
    ) -> Vec<ScoredUniversity> {
        let pipeline = FilterPipeline::eligibility(country);
        let eligible = pipeline.apply(catalog.iter().collect(), profile);
        debug!(
            "{} of {} catalog entries eligible in {}",
            eligible.len(),
            catalog.len(),
            country
        );

        let breakdowns = self.scorer.score_all(&eligible, profile);
        let weights = self.scorer.weights();

        let scored: Vec<ScoredUniversity> = eligible
            .into_iter()
            .zip(breakdowns)
            .map(|(university, breakdown)| ScoredUniversity {
                university: university.clone(),
                match_score: breakdown.composite(weights),
                match_reasons: match_reasons(university, profile),
            })
            .collect();

        rank_and_cap(scored)
    }

    /// Score and explain one university as-is, skipping the eligibility
    /// filters and the ranking cap.
    pub fn score(&self, university: &University, profile: &StudentProfile) -> ScoredUniversity {
        ScoredUniversity {
            university: university.clone(),
            match_score: self.scorer.score(university, profile),
            match_reasons: match_reasons(university, profile),
        }
    }

    /// Sub-scores behind a university's match score
    pub fn explain(&self, university: &University, profile: &StudentProfile) -> ScoreBreakdown {
        self.scorer.breakdown(university, profile)
    }

    pub fn weights(&self) -> &ScoreWeights {
        self.scorer.weights()
    }
}

/// Ranked recommendations using the standard weights.
pub fn recommend(
    country: &str,
    profile: &StudentProfile,
    catalog: &[University],
) -> Vec<ScoredUniversity> {
    RecommendationEngine::new().recommend(country, profile, catalog)
}
