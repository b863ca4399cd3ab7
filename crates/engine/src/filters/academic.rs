//! Filter out universities far above the student's grade.

use crate::traits::EligibilityFilter;
use catalog::University;
use profile::StudentProfile;

/// Fraction of `minGPA` a student must reach to stay eligible
pub const ACADEMIC_FLOOR_RATIO: f64 = 0.85;

/// Removes universities whose minimum GPA the student misses by more than
/// 15%.
///
/// The student's grade is normalised to the 4.0 scale first. A missing
/// grade normalises to 0, which makes the student ineligible for any
/// university with a non-zero `minGPA`.
pub struct AcademicFloorFilter {
    floor_ratio: f64,
}

impl AcademicFloorFilter {
    pub fn new(floor_ratio: f64) -> Self {
        Self { floor_ratio }
    }
}

impl Default for AcademicFloorFilter {
    fn default() -> Self {
        Self::new(ACADEMIC_FLOOR_RATIO)
    }
}

impl EligibilityFilter for AcademicFloorFilter {
    fn name(&self) -> &str {
        "AcademicFloorFilter"
    }

    fn admits(&self, university: &University, profile: &StudentProfile) -> bool {
        profile.normalized_gpa() >= university.min_gpa * self.floor_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::fixtures::university;
    use profile::GradeSystem;

    #[test]
    fn test_academic_floor() {
        // minGPA 3.0 -> floor 2.55
        let uni = university("u", "Canada");
        let filter = AcademicFloorFilter::default();

        let above = StudentProfile { gpa: Some(2.6), ..StudentProfile::default() };
        let below = StudentProfile { gpa: Some(2.5), ..StudentProfile::default() };

        assert!(filter.admits(&uni, &above));
        assert!(!filter.admits(&uni, &below));
    }

    #[test]
    fn test_grade_is_normalised() {
        let uni = university("u", "Canada");
        // 70% -> 2.8 on the 4.0 scale
        let profile = StudentProfile {
            gpa: Some(70.0),
            grade_system: GradeSystem::Percentage,
            ..StudentProfile::default()
        };

        assert!(AcademicFloorFilter::default().admits(&uni, &profile));
    }

    #[test]
    fn test_missing_gpa_is_ineligible() {
        let uni = university("u", "Canada");
        assert!(!AcademicFloorFilter::default().admits(&uni, &StudentProfile::default()));

        let mut open = university("open", "Canada");
        open.min_gpa = 0.0;
        open.avg_gpa = 0.0;
        assert!(AcademicFloorFilter::default().admits(&open, &StudentProfile::default()));
    }
}
