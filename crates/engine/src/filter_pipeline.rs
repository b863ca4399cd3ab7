//! The FilterPipeline chains eligibility filters.

use crate::filters::{AcademicFloorFilter, BudgetFilter, CountryFilter, LanguageFilter};
use crate::traits::EligibilityFilter;
use catalog::University;
use profile::StudentProfile;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CountryFilter::new("Canada"))
///     .add_filter(BudgetFilter::default());
///
/// let eligible = pipeline.apply(candidates, &profile);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn EligibilityFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard pipeline: country first, then budget, academic floor
    /// and language floor.
    pub fn eligibility(country: impl Into<String>) -> Self {
        Self::new()
            .add_filter(CountryFilter::new(country))
            .add_filter(BudgetFilter::default())
            .add_filter(AcademicFloorFilter::default())
            .add_filter(LanguageFilter::default())
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl EligibilityFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence, logging counts around each one.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a University>,
        profile: &StudentProfile,
    ) -> Vec<&'a University> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, profile);
            debug!(
                "Filter applied: {} (input count: {}, output count: {})",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::fixtures::university;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let a = university("a", "Canada");
        let b = university("b", "Germany");

        let kept = pipeline.apply(vec![&a, &b], &StudentProfile::default());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(CountryFilter::new("Germany"));
        let a = university("a", "Canada");
        let b = university("b", "Germany");

        let kept = pipeline.apply(vec![&a, &b], &StudentProfile::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "b");
    }

    #[test]
    fn test_eligibility_order() {
        let pipeline = FilterPipeline::eligibility("Canada");
        assert_eq!(
            pipeline.filter_names(),
            vec!["CountryFilter", "BudgetFilter", "AcademicFloorFilter", "LanguageFilter"]
        );
    }
}
