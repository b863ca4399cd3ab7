//! Core traits for the eligibility pipeline.

use catalog::University;
use profile::StudentProfile;

/// A hard eligibility rule.
///
/// Filters remove universities outright; they never adjust scores. All
/// filters are infallible: a profile field a rule depends on being absent
/// means the rule either doesn't apply or falls back to its documented
/// default.
///
/// `Send + Sync` lets a pipeline be shared across threads.
pub trait EligibilityFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `university` stays in the candidate set for `profile`
    fn admits(&self, university: &University, profile: &StudentProfile) -> bool;

    /// Apply this filter to a set of candidates, keeping their order.
    fn apply<'a>(
        &self,
        candidates: Vec<&'a University>,
        profile: &StudentProfile,
    ) -> Vec<&'a University> {
        candidates
            .into_iter()
            .filter(|university| self.admits(university, profile))
            .collect()
    }
}
