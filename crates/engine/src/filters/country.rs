//! Filter to the requested country.
//!
//! Always the first filter: every later stage only sees universities in the
//! country the student picked.

use crate::traits::EligibilityFilter;
use catalog::University;
use profile::StudentProfile;

/// Keeps universities whose `country` equals the requested one exactly.
///
/// No case folding, trimming or aliasing: "UK" does not match
/// "United Kingdom".
pub struct CountryFilter {
    country: String,
}

impl CountryFilter {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

impl EligibilityFilter for CountryFilter {
    fn name(&self) -> &str {
        "CountryFilter"
    }

    fn admits(&self, university: &University, _profile: &StudentProfile) -> bool {
        university.country == self.country
    }
}
