//! Student profile types.
//!
//! A `StudentProfile` is the complete input the recommendation engine sees
//! for one student. Optional fields stay `None` when the student skipped
//! them; the engine substitutes neutral scores instead of failing.

use crate::error::{ProfileError, Result};
use crate::grades::normalize_gpa;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    #[default]
    Undergraduate,
    Postgraduate,
}

/// Scale the student's grade was reported on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeSystem {
    /// 4.0 scale
    #[default]
    Gpa,
    /// 0 - 100
    Percentage,
    /// 10.0 scale
    Cgpa,
}

/// Three-step importance / preference level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationPreference {
    Urban,
    Suburban,
    Rural,
    Coastal,
    #[default]
    Any,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreference {
    Small,
    Medium,
    Large,
    #[default]
    Any,
}

/// Implements `FromStr` (case-insensitive) and `Display` using the same
/// lowercase names as the JSON representation.
macro_rules! keyword_enum {
    ($ty:ident, $field:literal, { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = ProfileError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(ProfileError::InvalidValue {
                        field: $field.to_string(),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let name = match self {
                    $($ty::$variant => $name,)+
                };
                f.write_str(name)
            }
        }
    };
}

keyword_enum!(DegreeLevel, "degreeLevel", {
    "undergraduate" => Undergraduate,
    "postgraduate" => Postgraduate,
});

keyword_enum!(GradeSystem, "gradeSystem", {
    "gpa" => Gpa,
    "percentage" => Percentage,
    "cgpa" => Cgpa,
});

keyword_enum!(Level, "level", {
    "low" => Low,
    "medium" => Medium,
    "high" => High,
});

keyword_enum!(LocationPreference, "locationPreference", {
    "urban" => Urban,
    "suburban" => Suburban,
    "rural" => Rural,
    "coastal" => Coastal,
    "any" => Any,
});

keyword_enum!(SizePreference, "universitySize", {
    "small" => Small,
    "medium" => Medium,
    "large" => Large,
    "any" => Any,
});

// =============================================================================
// StudentProfile
// =============================================================================

/// Everything the student told us about themselves.
///
/// Missing JSON fields fall back to the profile form's initial state (see
/// `Default`), so a profile file only needs the answers that differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentProfile {
    // Academic information
    pub degree_level: DegreeLevel,
    pub field_of_study: Option<String>,
    pub gpa: Option<f64>,
    pub grade_system: GradeSystem,

    // Test scores
    pub sat: Option<u32>,
    pub act: Option<u32>,
    pub gre: Option<u32>,
    pub gmat: Option<u32>,
    pub ielts: Option<f64>,
    pub toefl: Option<f64>,

    // Financial preferences
    pub annual_budget: Option<f64>,
    pub currency: String,
    pub financial_aid_needed: bool,

    // Location & lifestyle
    pub cost_of_living_preference: Level,
    pub location_preference: LocationPreference,
    pub language_of_instruction: Vec<String>,

    // Career & future goals
    pub career_goals: Vec<String>,
    pub internship_importance: Level,
    pub post_study_work_importance: Level,

    // Additional preferences
    pub university_size: SizePreference,
    pub research_opportunities: bool,
    pub diversity_importance: Level,
    pub climate_preference: Option<String>,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            degree_level: DegreeLevel::Undergraduate,
            field_of_study: None,
            gpa: None,
            grade_system: GradeSystem::Gpa,
            sat: None,
            act: None,
            gre: None,
            gmat: None,
            ielts: None,
            toefl: None,
            annual_budget: None,
            currency: "USD".to_string(),
            financial_aid_needed: false,
            cost_of_living_preference: Level::Medium,
            location_preference: LocationPreference::Any,
            language_of_instruction: vec!["English".to_string()],
            career_goals: Vec::new(),
            internship_importance: Level::Medium,
            post_study_work_importance: Level::Medium,
            university_size: SizePreference::Any,
            research_opportunities: false,
            diversity_importance: Level::Medium,
            climate_preference: None,
        }
    }
}

impl StudentProfile {
    /// Decode a profile from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Grade converted to the 4.0 scale. A missing grade counts as 0.
    pub fn normalized_gpa(&self) -> f64 {
        normalize_gpa(self.gpa.unwrap_or(0.0), self.grade_system)
    }

    /// Annual budget, if one was given. Zero or negative means "not given".
    pub fn budget(&self) -> Option<f64> {
        self.annual_budget.filter(|budget| *budget > 0.0)
    }

    /// Field of study with surrounding whitespace removed; blank means absent
    pub fn field_of_study(&self) -> Option<&str> {
        self.field_of_study
            .as_deref()
            .map(str::trim)
            .filter(|field| !field.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_initial_state() {
        let profile = StudentProfile::default();

        assert_eq!(profile.degree_level, DegreeLevel::Undergraduate);
        assert_eq!(profile.grade_system, GradeSystem::Gpa);
        assert_eq!(profile.currency, "USD");
        assert_eq!(profile.location_preference, LocationPreference::Any);
        assert_eq!(profile.university_size, SizePreference::Any);
        assert_eq!(profile.language_of_instruction, vec!["English".to_string()]);
        assert!(!profile.financial_aid_needed);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let profile = StudentProfile::from_json_str(
            r#"{ "gpa": 85, "gradeSystem": "percentage", "annualBudget": 40000, "locationPreference": "coastal" }"#,
        )
        .unwrap();

        assert_eq!(profile.gpa, Some(85.0));
        assert_eq!(profile.grade_system, GradeSystem::Percentage);
        assert_eq!(profile.location_preference, LocationPreference::Coastal);
        assert_eq!(profile.internship_importance, Level::Medium);
        assert_eq!(profile.currency, "USD");
    }

    #[test]
    fn test_missing_gpa_normalizes_to_zero() {
        let profile = StudentProfile::default();
        assert_eq!(profile.normalized_gpa(), 0.0);
    }

    #[test]
    fn test_non_positive_budget_is_absent() {
        let mut profile = StudentProfile::default();
        assert_eq!(profile.budget(), None);

        profile.annual_budget = Some(0.0);
        assert_eq!(profile.budget(), None);

        profile.annual_budget = Some(25_000.0);
        assert_eq!(profile.budget(), Some(25_000.0));
    }

    #[test]
    fn test_blank_field_of_study_is_absent() {
        let mut profile = StudentProfile::default();
        profile.field_of_study = Some("   ".to_string());
        assert_eq!(profile.field_of_study(), None);

        profile.field_of_study = Some(" Physics ".to_string());
        assert_eq!(profile.field_of_study(), Some("Physics"));
    }

    #[test]
    fn test_keyword_parsing_is_case_insensitive() {
        assert_eq!("High".parse::<Level>().unwrap(), Level::High);
        assert_eq!("CGPA".parse::<GradeSystem>().unwrap(), GradeSystem::Cgpa);
        assert!("huge".parse::<SizePreference>().is_err());
        assert_eq!(LocationPreference::Coastal.to_string(), "coastal");
    }
}
