//! Filter out universities the student clearly cannot afford.

use crate::traits::EligibilityFilter;
use catalog::University;
use profile::StudentProfile;

/// How far over budget a university may be and still be shown
pub const BUDGET_TOLERANCE: f64 = 1.3;

/// Removes universities whose annual cost exceeds the budget by more than
/// the tolerance.
///
/// ## Algorithm
/// Exclude when `tuition.international + living.medium > budget * tolerance`.
/// Without a budget the filter admits everything.
pub struct BudgetFilter {
    tolerance: f64,
}

impl BudgetFilter {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for BudgetFilter {
    fn default() -> Self {
        Self::new(BUDGET_TOLERANCE)
    }
}

impl EligibilityFilter for BudgetFilter {
    fn name(&self) -> &str {
        "BudgetFilter"
    }

    fn admits(&self, university: &University, profile: &StudentProfile) -> bool {
        match profile.budget() {
            Some(budget) => university.total_annual_cost() <= budget * self.tolerance,
            None => true,
        }
    }
}
