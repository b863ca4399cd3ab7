//! In-progress profile form.
//!
//! The form starts from the default answers, takes updates one at a time,
//! and only hands a profile to the engine once the required answers are in.

use crate::error::{ProfileError, Result};
use crate::types::StudentProfile;
use crate::update::ProfileUpdate;

/// A profile that has not been submitted yet
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    profile: StudentProfile,
}

impl ProfileDraft {
    /// Start a new draft with the form defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue editing an existing profile
    pub fn from_profile(profile: StudentProfile) -> Self {
        Self { profile }
    }

    /// Apply an update (builder pattern)
    pub fn set(mut self, update: ProfileUpdate) -> Self {
        self.profile.apply(update);
        self
    }

    /// Apply an update in place
    pub fn update(&mut self, update: ProfileUpdate) -> &mut Self {
        self.profile.apply(update);
        self
    }

    /// Current answers, submitted or not
    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    /// Required fields still missing, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.profile.field_of_study().is_none() {
            missing.push("fieldOfStudy");
        }
        if !self.profile.gpa.is_some_and(|gpa| gpa > 0.0) {
            missing.push("gpa");
        }
        if self.profile.budget().is_none() {
            missing.push("annualBudget");
        }
        missing
    }

    /// Finish the form.
    ///
    /// Field of study, grade and annual budget are required; the first one
    /// missing is reported.
    pub fn submit(self) -> Result<StudentProfile> {
        if let Some(field) = self.missing_fields().first().copied() {
            return Err(ProfileError::MissingField(field));
        }
        Ok(self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_reports_all_required_fields() {
        let draft = ProfileDraft::new();
        assert_eq!(draft.missing_fields(), vec!["fieldOfStudy", "gpa", "annualBudget"]);
    }

    #[test]
    fn test_submit_requires_field_of_study_first() {
        let err = ProfileDraft::new()
            .set(ProfileUpdate::Gpa(Some(3.5)))
            .submit()
            .unwrap_err();
        assert!(matches!(err, ProfileError::MissingField("fieldOfStudy")));
    }

    #[test]
    fn test_complete_draft_submits() {
        let profile = ProfileDraft::new()
            .set(ProfileUpdate::FieldOfStudy(Some("Computer Science".to_string())))
            .set(ProfileUpdate::Gpa(Some(3.6)))
            .set(ProfileUpdate::AnnualBudget(Some(50_000.0)))
            .submit()
            .unwrap();

        assert_eq!(profile.field_of_study(), Some("Computer Science"));
        assert_eq!(profile.budget(), Some(50_000.0));
    }

    #[test]
    fn test_update_in_place() {
        let mut draft = ProfileDraft::new();
        draft
            .update(ProfileUpdate::Gpa(Some(3.0)))
            .update(ProfileUpdate::Gpa(Some(3.9)));
        assert_eq!(draft.profile().gpa, Some(3.9));
    }
}
