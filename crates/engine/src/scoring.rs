//! Match scoring for eligible universities.
//!
//! Every eligible university gets five sub-scores in 0-100, combined into a
//! weighted composite:
//!
//! | Component   | Weight |
//! |-------------|--------|
//! | Academic    | 35     |
//! | Financial   | 30     |
//! | Field match | 15     |
//! | Test scores | 10     |
//! | Preferences | 10     |
//!
//! All five components are always applied. When the profile lacks the
//! input a component needs, that component contributes a fixed neutral
//! sub-score instead of being dropped.

use catalog::{CampusLocation, CampusSize, ScoreRange, University};
use profile::{LocationPreference, SizePreference, StudentProfile};
use rayon::prelude::*;
use serde::Serialize;

/// Neutral financial sub-score when no budget was given
pub const NEUTRAL_FINANCIAL: f64 = 50.0;
/// Neutral field sub-score when no field of study was given
pub const NEUTRAL_FIELD: f64 = 70.0;
/// Neutral test sub-score when no comparable test score exists
pub const NEUTRAL_TESTS: f64 = 75.0;
/// Neutral preference sub-score when no preference check applies
pub const NEUTRAL_PREFERENCES: f64 = 75.0;

// =============================================================================
// Weights & Breakdown
// =============================================================================

/// Relative weight of each component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreWeights {
    pub academic: u32,
    pub financial: u32,
    pub field: u32,
    pub tests: u32,
    pub preferences: u32,
}

impl ScoreWeights {
    pub fn total(&self) -> u32 {
        self.academic + self.financial + self.field + self.tests + self.preferences
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            academic: 35,
            financial: 30,
            field: 15,
            tests: 10,
            preferences: 10,
        }
    }
}

/// The five sub-scores for one (profile, university) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub academic: f64,
    pub financial: f64,
    pub field: f64,
    pub tests: f64,
    pub preferences: f64,
}

impl ScoreBreakdown {
    /// Weighted mean of the sub-scores, rounded to the nearest integer and
    /// clamped to 0-100.
    pub fn composite(&self, weights: &ScoreWeights) -> u8 {
        let total = weights.total();
        if total == 0 {
            return 0;
        }
        let weighted = self.academic * f64::from(weights.academic)
            + self.financial * f64::from(weights.financial)
            + self.field * f64::from(weights.field)
            + self.tests * f64::from(weights.tests)
            + self.preferences * f64::from(weights.preferences);

        (weighted / f64::from(total)).round().clamp(0.0, 100.0) as u8
    }
}

// =============================================================================
// MatchScorer
// =============================================================================

/// Computes score breakdowns for candidates in parallel.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    weights: ScoreWeights,
}

impl MatchScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score all candidates; output is in the same order as the input.
    pub fn score_all(
        &self,
        candidates: &[&University],
        profile: &StudentProfile,
    ) -> Vec<ScoreBreakdown> {
        candidates
            .par_iter()
            .map(|university| self.breakdown(university, profile))
            .collect()
    }

    /// Sub-scores for a single university
    pub fn breakdown(&self, university: &University, profile: &StudentProfile) -> ScoreBreakdown {
        ScoreBreakdown {
            academic: academic_score(profile.normalized_gpa(), university),
            financial: financial_score(profile.budget(), university),
            field: field_score(profile.field_of_study(), university),
            tests: test_score(profile, university),
            preferences: preference_score(profile, university),
        }
    }

    /// Composite score for a single university
    pub fn score(&self, university: &University, profile: &StudentProfile) -> u8 {
        self.breakdown(university, profile).composite(&self.weights)
    }
}

// =============================================================================
// Component Scores
// =============================================================================

/// GPA (4.0 scale) against the university's average and minimum.
pub fn academic_score(gpa: f64, university: &University) -> f64 {
    let (avg, min) = (university.avg_gpa, university.min_gpa);
    if gpa >= avg + 0.2 {
        100.0
    } else if gpa >= avg {
        90.0
    } else if gpa >= min + 0.2 {
        80.0
    } else if gpa >= min {
        70.0
    } else if gpa >= min * 0.9 {
        50.0
    } else {
        25.0
    }
}

/// Budget coverage of one year's cost.
pub fn financial_score(budget: Option<f64>, university: &University) -> f64 {
    let Some(budget) = budget else {
        return NEUTRAL_FINANCIAL;
    };
    let ratio = budget / university.total_annual_cost();
    if ratio >= 1.5 {
        100.0
    } else if ratio >= 1.2 {
        90.0
    } else if ratio >= 1.0 {
        80.0
    } else if ratio >= 0.8 {
        60.0
    } else if ratio >= 0.6 {
        40.0
    } else {
        20.0
    }
}

/// How a field of study lines up with what a university teaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMatch {
    /// Matches one of the university's strong departments
    StrongDepartment,
    /// Matches a program, but not a strong department
    Program,
    Unmatched,
}

/// Case-insensitive substring match in either direction, so "Computer
/// Science" matches a "Science" department and "Engineering" matches
/// "Mechanical Engineering".
pub fn match_field(field: &str, university: &University) -> FieldMatch {
    let field = field.to_lowercase();
    let overlaps = |name: &String| {
        let name = name.trim().to_lowercase();
        !name.is_empty() && (name.contains(&field) || field.contains(&name))
    };

    if university.strong_departments.iter().any(overlaps) {
        FieldMatch::StrongDepartment
    } else if university.programs.iter().any(overlaps) {
        FieldMatch::Program
    } else {
        FieldMatch::Unmatched
    }
}

pub fn field_score(field: Option<&str>, university: &University) -> f64 {
    match field.map(|field| match_field(field, university)) {
        None => NEUTRAL_FIELD,
        Some(FieldMatch::StrongDepartment) => 100.0,
        Some(FieldMatch::Program) => 80.0,
        Some(FieldMatch::Unmatched) => 40.0,
    }
}

/// Mean of the per-test sub-scores that can be computed.
///
/// A test counts when the student reported it and the university publishes
/// the matching threshold: IELTS and TOEFL against their minimums, SAT and
/// GRE against their ranges.
pub fn test_score(profile: &StudentProfile, university: &University) -> f64 {
    let mut scores = Vec::with_capacity(4);

    if let (Some(ielts), Some(min)) = (profile.ielts, university.ielts_min) {
        scores.push(tiered_minimum(ielts, min, 1.0, 0.5, 0.5));
    }
    if let (Some(toefl), Some(min)) = (profile.toefl, university.toefl_min) {
        scores.push(tiered_minimum(toefl, min, 15.0, 5.0, 10.0));
    }
    if let (Some(sat), Some(range)) = (profile.sat, university.sat_range.as_ref()) {
        scores.push(range_score(f64::from(sat), range));
    }
    if let (Some(gre), Some(range)) = (profile.gre, university.gre_range.as_ref()) {
        scores.push(range_score(f64::from(gre), range));
    }

    mean_or(&scores, NEUTRAL_TESTS)
}

/// Banding for tests with a published minimum.
///
/// `>= min + high` -> 100, `>= min + mid` -> 90, `>= min` -> 80,
/// `>= min - short` -> 60, else 30.
fn tiered_minimum(score: f64, min: f64, high: f64, mid: f64, short: f64) -> f64 {
    if score >= min + high {
        100.0
    } else if score >= min + mid {
        90.0
    } else if score >= min {
        80.0
    } else if score >= min - short {
        60.0
    } else {
        30.0
    }
}

/// Banding for tests with a published range, shaped like the GPA bands.
fn range_score(score: f64, range: &ScoreRange) -> f64 {
    if score >= range.max {
        100.0
    } else if score >= range.avg {
        90.0
    } else if score >= range.min {
        70.0
    } else if score >= range.min * 0.9 {
        50.0
    } else {
        25.0
    }
}

/// Mean over the preference checks that apply to this profile.
///
/// - location (unless "any"): match 100, else 50
/// - campus size (unless "any"): match 100, else 70
/// - research wanted: offered 100, else 30
/// - financial aid needed: available 100, else 20
pub fn preference_score(profile: &StudentProfile, university: &University) -> f64 {
    let mut scores = Vec::with_capacity(4);

    if let Some(matches) = location_matches(profile.location_preference, university.location) {
        scores.push(if matches { 100.0 } else { 50.0 });
    }
    if let Some(matches) = size_matches(profile.university_size, university.campus_size) {
        scores.push(if matches { 100.0 } else { 70.0 });
    }
    if profile.research_opportunities {
        scores.push(if university.research_opportunities { 100.0 } else { 30.0 });
    }
    if profile.financial_aid_needed {
        scores.push(if university.financial_aid_available { 100.0 } else { 20.0 });
    }

    mean_or(&scores, NEUTRAL_PREFERENCES)
}

/// `None` when the student has no location preference
pub fn location_matches(preference: LocationPreference, location: CampusLocation) -> Option<bool> {
    let wanted = match preference {
        LocationPreference::Any => return None,
        LocationPreference::Urban => CampusLocation::Urban,
        LocationPreference::Suburban => CampusLocation::Suburban,
        LocationPreference::Rural => CampusLocation::Rural,
        LocationPreference::Coastal => CampusLocation::Coastal,
    };
    Some(wanted == location)
}

/// `None` when the student has no size preference
pub fn size_matches(preference: SizePreference, size: CampusSize) -> Option<bool> {
    let wanted = match preference {
        SizePreference::Any => return None,
        SizePreference::Small => CampusSize::Small,
        SizePreference::Medium => CampusSize::Medium,
        SizePreference::Large => CampusSize::Large,
    };
    Some(wanted == size)
}

fn mean_or(scores: &[f64], neutral: f64) -> f64 {
    if scores.is_empty() {
        neutral
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::fixtures::university;

    fn profile() -> StudentProfile {
        StudentProfile::default()
    }

    #[test]
    fn test_academic_bands() {
        // min 3.0, avg 3.5
        let uni = university("u", "Canada");

        assert_eq!(academic_score(3.8, &uni), 100.0);
        assert_eq!(academic_score(3.6, &uni), 90.0);
        assert_eq!(academic_score(3.3, &uni), 80.0);
        assert_eq!(academic_score(3.1, &uni), 70.0);
        assert_eq!(academic_score(2.8, &uni), 50.0);
        assert_eq!(academic_score(2.6, &uni), 25.0);
    }

    #[test]
    fn test_financial_bands() {
        // total cost 30,000
        let uni = university("u", "Canada");

        assert_eq!(financial_score(None, &uni), NEUTRAL_FINANCIAL);
        assert_eq!(financial_score(Some(45_000.0), &uni), 100.0);
        assert_eq!(financial_score(Some(40_000.0), &uni), 90.0);
        assert_eq!(financial_score(Some(30_000.0), &uni), 80.0);
        assert_eq!(financial_score(Some(25_000.0), &uni), 60.0);
        assert_eq!(financial_score(Some(19_000.0), &uni), 40.0);
        assert_eq!(financial_score(Some(10_000.0), &uni), 20.0);
    }

    #[test]
    fn test_field_match_either_direction() {
        let mut uni = university("u", "Canada");
        uni.strong_departments = vec!["Mechanical Engineering".to_string()];
        uni.programs = vec!["Economics".to_string(), "Law".to_string()];

        assert_eq!(match_field("engineering", &uni), FieldMatch::StrongDepartment);
        assert_eq!(match_field("Economics and Finance", &uni), FieldMatch::Program);
        assert_eq!(match_field("Medicine", &uni), FieldMatch::Unmatched);

        assert_eq!(field_score(Some("engineering"), &uni), 100.0);
        assert_eq!(field_score(Some("Economics and Finance"), &uni), 80.0);
        assert_eq!(field_score(Some("Medicine"), &uni), 40.0);
        assert_eq!(field_score(None, &uni), NEUTRAL_FIELD);
    }

    #[test]
    fn test_blank_department_never_matches() {
        let mut uni = university("u", "Canada");
        uni.strong_departments = vec!["  ".to_string()];
        assert_eq!(match_field("History", &uni), FieldMatch::Unmatched);
    }

    #[test]
    fn test_test_score_neutral_without_comparable_tests() {
        let uni = university("u", "Canada");
        let mut p = profile();
        assert_eq!(test_score(&p, &uni), NEUTRAL_TESTS);

        // Reported, but the university publishes nothing to compare against
        p.ielts = Some(7.5);
        p.sat = Some(1500);
        assert_eq!(test_score(&p, &uni), NEUTRAL_TESTS);
    }

    #[test]
    fn test_test_score_averages_present_tests() {
        let mut uni = university("u", "Canada");
        uni.ielts_min = Some(6.5);
        uni.sat_range = Some(ScoreRange { min: 1300.0, max: 1550.0, avg: 1450.0 });

        let p = StudentProfile {
            ielts: Some(7.5),
            sat: Some(1350),
            ..profile()
        };
        // IELTS +1.0 -> 100, SAT between min and avg -> 70
        assert_eq!(test_score(&p, &uni), 85.0);
    }

    #[test]
    fn test_language_test_bands() {
        assert_eq!(tiered_minimum(7.0, 6.5, 1.0, 0.5, 0.5), 90.0);
        assert_eq!(tiered_minimum(6.5, 6.5, 1.0, 0.5, 0.5), 80.0);
        assert_eq!(tiered_minimum(6.0, 6.5, 1.0, 0.5, 0.5), 60.0);
        assert_eq!(tiered_minimum(5.5, 6.5, 1.0, 0.5, 0.5), 30.0);
        assert_eq!(tiered_minimum(115.0, 100.0, 15.0, 5.0, 10.0), 100.0);
        assert_eq!(tiered_minimum(92.0, 100.0, 15.0, 5.0, 10.0), 60.0);
    }

    #[test]
    fn test_preferences() {
        let mut uni = university("u", "Canada");
        uni.location = CampusLocation::Urban;
        uni.campus_size = CampusSize::Large;
        uni.research_opportunities = false;
        uni.financial_aid_available = true;

        assert_eq!(preference_score(&profile(), &uni), NEUTRAL_PREFERENCES);

        let p = StudentProfile {
            location_preference: LocationPreference::Urban,
            university_size: SizePreference::Small,
            research_opportunities: true,
            financial_aid_needed: true,
            ..profile()
        };
        // (100 + 70 + 30 + 100) / 4
        assert_eq!(preference_score(&p, &uni), 75.0);
    }

    #[test]
    fn test_composite_rounds_half_up() {
        let breakdown = ScoreBreakdown {
            academic: 100.0,
            financial: 90.0,
            field: NEUTRAL_FIELD,
            tests: NEUTRAL_TESTS,
            preferences: NEUTRAL_PREFERENCES,
        };
        // 8750 / 100 = 87.5
        assert_eq!(breakdown.composite(&ScoreWeights::default()), 88);
    }

    #[test]
    fn test_score_all_preserves_order() {
        let mut strong = university("strong", "Canada");
        strong.min_gpa = 2.0;
        strong.avg_gpa = 2.5;
        let weak = university("weak", "Canada");

        let p = StudentProfile { gpa: Some(3.2), ..profile() };
        let scorer = MatchScorer::default();
        let breakdowns = scorer.score_all(&[&weak, &strong], &p);

        assert_eq!(breakdowns.len(), 2);
        assert_eq!(breakdowns[0].academic, 80.0);
        assert_eq!(breakdowns[1].academic, 100.0);
    }
}
