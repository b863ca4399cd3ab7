//! Grade normalisation.
//!
//! Universities publish GPA thresholds on the 4.0 scale, so every student
//! grade is converted to that scale before it is compared.

use crate::types::GradeSystem;

/// Convert a grade on `system` to the 4.0 scale.
///
/// - percentage: `gpa / 100 * 4.0`
/// - cgpa: `gpa / 10 * 4.0`
/// - gpa: unchanged
pub fn normalize_gpa(gpa: f64, system: GradeSystem) -> f64 {
    match system {
        GradeSystem::Percentage => gpa / 100.0 * 4.0,
        GradeSystem::Cgpa => gpa / 10.0 * 4.0,
        GradeSystem::Gpa => gpa,
    }
}
