//! Filter on English-language test minimums.

use crate::traits::EligibilityFilter;
use catalog::University;
use profile::StudentProfile;

/// IELTS band a student may fall short of the minimum and stay eligible
pub const IELTS_TOLERANCE: f64 = 0.5;
/// TOEFL points a student may fall short of the minimum and stay eligible
pub const TOEFL_TOLERANCE: f64 = 10.0;

/// Removes universities whose IELTS or TOEFL minimum the student misses by
/// more than the tolerance.
///
/// A test only counts when the student reported it and the university
/// publishes a minimum for it.
pub struct LanguageFilter {
    ielts_tolerance: f64,
    toefl_tolerance: f64,
}

impl LanguageFilter {
    pub fn new(ielts_tolerance: f64, toefl_tolerance: f64) -> Self {
        Self {
            ielts_tolerance,
            toefl_tolerance,
        }
    }
}

impl Default for LanguageFilter {
    fn default() -> Self {
        Self::new(IELTS_TOLERANCE, TOEFL_TOLERANCE)
    }
}

impl EligibilityFilter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn admits(&self, university: &University, profile: &StudentProfile) -> bool {
        if let (Some(ielts), Some(min)) = (profile.ielts, university.ielts_min) {
            if ielts < min - self.ielts_tolerance {
                return false;
            }
        }
        if let (Some(toefl), Some(min)) = (profile.toefl, university.toefl_min) {
            if toefl < min - self.toefl_tolerance {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::fixtures::university;

    fn with_minimums(ielts: Option<f64>, toefl: Option<f64>) -> University {
        let mut uni = university("u", "Canada");
        uni.ielts_min = ielts;
        uni.toefl_min = toefl;
        uni
    }

    #[test]
    fn test_ielts_tolerance() {
        let uni = with_minimums(Some(7.0), None);
        let filter = LanguageFilter::default();

        let within = StudentProfile { ielts: Some(6.5), ..StudentProfile::default() };
        let short = StudentProfile { ielts: Some(6.0), ..StudentProfile::default() };

        assert!(filter.admits(&uni, &within));
        assert!(!filter.admits(&uni, &short));
    }

    #[test]
    fn test_toefl_tolerance() {
        let uni = with_minimums(None, Some(100.0));
        let filter = LanguageFilter::default();

        let within = StudentProfile { toefl: Some(90.0), ..StudentProfile::default() };
        let short = StudentProfile { toefl: Some(89.0), ..StudentProfile::default() };

        assert!(filter.admits(&uni, &within));
        assert!(!filter.admits(&uni, &short));
    }

    #[test]
    fn test_missing_scores_or_minimums_admit() {
        let filter = LanguageFilter::default();

        // No scores reported
        let strict = with_minimums(Some(8.0), Some(115.0));
        assert!(filter.admits(&strict, &StudentProfile::default()));

        // Low score but no published minimum
        let open = with_minimums(None, None);
        let weak = StudentProfile { ielts: Some(4.0), toefl: Some(40.0), ..StudentProfile::default() };
        assert!(filter.admits(&open, &weak));
    }
}
