//! Ranking and the adaptive result cap.

use catalog::University;
use serde::Serialize;

/// Score a result needs to count as a high-quality match
pub const HIGH_MATCH_SCORE: u8 = 80;
/// High-quality matches needed before the shorter list is used
pub const HIGH_MATCH_COUNT: usize = 5;
/// Result length when there are enough high-quality matches
pub const SHORT_LIST_LEN: usize = 8;
/// Result length otherwise
pub const LONG_LIST_LEN: usize = 10;

/// A catalog record decorated with its match against one profile.
///
/// The university is a copy; the catalog record itself is never touched.
/// Serialises flat, so a result looks like the catalog record plus
/// `matchScore` and `matchReasons`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredUniversity {
    #[serde(flatten)]
    pub university: University,
    /// 0 - 100
    pub match_score: u8,
    /// At most four short reasons, most important first
    pub match_reasons: Vec<String>,
}

/// How many results to return for a set of scored universities.
///
/// If at least `HIGH_MATCH_COUNT` universities scored `HIGH_MATCH_SCORE`
/// or more, the list is trimmed to `SHORT_LIST_LEN`; otherwise to
/// `LONG_LIST_LEN`.
pub fn result_limit(scored: &[ScoredUniversity]) -> usize {
    let high_matches = scored
        .iter()
        .filter(|result| result.match_score >= HIGH_MATCH_SCORE)
        .count();

    if high_matches >= HIGH_MATCH_COUNT {
        SHORT_LIST_LEN
    } else {
        LONG_LIST_LEN
    }
}

/// Sort by descending score and apply the adaptive cap.
///
/// The sort is stable: universities with equal scores keep their catalog
/// order.
pub fn rank_and_cap(mut scored: Vec<ScoredUniversity>) -> Vec<ScoredUniversity> {
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    let limit = result_limit(&scored);
    scored.truncate(limit);
    scored
}
