//! Field-by-field profile updates.
//!
//! The profile form edits one answer at a time. Each editable field has its
//! own `ProfileUpdate` variant, so an update can never target a field that
//! doesn't exist or carry a value of the wrong type.

use crate::error::{ProfileError, Result};
use crate::types::*;

/// A single answer change on the profile form
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    DegreeLevel(DegreeLevel),
    FieldOfStudy(Option<String>),
    Gpa(Option<f64>),
    GradeSystem(GradeSystem),
    Sat(Option<u32>),
    Act(Option<u32>),
    Gre(Option<u32>),
    Gmat(Option<u32>),
    Ielts(Option<f64>),
    Toefl(Option<f64>),
    AnnualBudget(Option<f64>),
    Currency(String),
    FinancialAidNeeded(bool),
    CostOfLivingPreference(Level),
    LocationPreference(LocationPreference),
    LanguageOfInstruction(Vec<String>),
    CareerGoals(Vec<String>),
    InternshipImportance(Level),
    PostStudyWorkImportance(Level),
    UniversitySize(SizePreference),
    ResearchOpportunities(bool),
    DiversityImportance(Level),
    ClimatePreference(Option<String>),
}

impl ProfileUpdate {
    /// Parse a `key=value` pair using the profile's JSON field names.
    ///
    /// An empty value clears optional fields. List fields take a
    /// comma-separated value.
    pub fn parse(key: &str, value: &str) -> Result<Self> {
        let value = value.trim();
        let update = match key.trim() {
            "degreeLevel" => Self::DegreeLevel(value.parse()?),
            "fieldOfStudy" => Self::FieldOfStudy(optional_text(value)),
            "gpa" => Self::Gpa(optional_number(key, value)?),
            "gradeSystem" => Self::GradeSystem(value.parse()?),
            "sat" => Self::Sat(optional_number(key, value)?),
            "act" => Self::Act(optional_number(key, value)?),
            "gre" => Self::Gre(optional_number(key, value)?),
            "gmat" => Self::Gmat(optional_number(key, value)?),
            "ielts" => Self::Ielts(optional_number(key, value)?),
            "toefl" => Self::Toefl(optional_number(key, value)?),
            "annualBudget" => Self::AnnualBudget(optional_number(key, value)?),
            "currency" => Self::Currency(value.to_ascii_uppercase()),
            "financialAidNeeded" => Self::FinancialAidNeeded(flag(key, value)?),
            "costOfLivingPreference" => Self::CostOfLivingPreference(value.parse()?),
            "locationPreference" => Self::LocationPreference(value.parse()?),
            "languageOfInstruction" => Self::LanguageOfInstruction(list(value)),
            "careerGoals" => Self::CareerGoals(list(value)),
            "internshipImportance" => Self::InternshipImportance(value.parse()?),
            "postStudyWorkImportance" => Self::PostStudyWorkImportance(value.parse()?),
            "universitySize" => Self::UniversitySize(value.parse()?),
            "researchOpportunities" => Self::ResearchOpportunities(flag(key, value)?),
            "diversityImportance" => Self::DiversityImportance(value.parse()?),
            "climatePreference" => Self::ClimatePreference(optional_text(value)),
            other => return Err(ProfileError::UnknownField(other.to_string())),
        };
        Ok(update)
    }

    /// Parse a single `key=value` argument
    pub fn parse_assignment(assignment: &str) -> Result<Self> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| ProfileError::InvalidValue {
            field: "assignment".to_string(),
            value: assignment.to_string(),
        })?;
        Self::parse(key, value)
    }
}

impl StudentProfile {
    /// Apply one update, returning the updated profile
    pub fn with(mut self, update: ProfileUpdate) -> Self {
        self.apply(update);
        self
    }

    /// Apply one update in place
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::DegreeLevel(v) => self.degree_level = v,
            ProfileUpdate::FieldOfStudy(v) => self.field_of_study = v,
            ProfileUpdate::Gpa(v) => self.gpa = v,
            ProfileUpdate::GradeSystem(v) => self.grade_system = v,
            ProfileUpdate::Sat(v) => self.sat = v,
            ProfileUpdate::Act(v) => self.act = v,
            ProfileUpdate::Gre(v) => self.gre = v,
            ProfileUpdate::Gmat(v) => self.gmat = v,
            ProfileUpdate::Ielts(v) => self.ielts = v,
            ProfileUpdate::Toefl(v) => self.toefl = v,
            ProfileUpdate::AnnualBudget(v) => self.annual_budget = v,
            ProfileUpdate::Currency(v) => self.currency = v,
            ProfileUpdate::FinancialAidNeeded(v) => self.financial_aid_needed = v,
            ProfileUpdate::CostOfLivingPreference(v) => self.cost_of_living_preference = v,
            ProfileUpdate::LocationPreference(v) => self.location_preference = v,
            ProfileUpdate::LanguageOfInstruction(v) => self.language_of_instruction = v,
            ProfileUpdate::CareerGoals(v) => self.career_goals = v,
            ProfileUpdate::InternshipImportance(v) => self.internship_importance = v,
            ProfileUpdate::PostStudyWorkImportance(v) => self.post_study_work_importance = v,
            ProfileUpdate::UniversitySize(v) => self.university_size = v,
            ProfileUpdate::ResearchOpportunities(v) => self.research_opportunities = v,
            ProfileUpdate::DiversityImportance(v) => self.diversity_importance = v,
            ProfileUpdate::ClimatePreference(v) => self.climate_preference = v,
        }
    }
}

fn optional_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn optional_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<Option<T>> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ProfileError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn flag(field: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ProfileError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
