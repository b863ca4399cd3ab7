//! Core domain types for the university catalog.
//!
//! Catalog records are immutable once loaded. Scoring never writes back into
//! a `University`; derived values live on separate output types.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a university (e.g. "oxford", "mit")
pub type UniversityId = String;

// =============================================================================
// Enums
// =============================================================================

/// Physical size of the campus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampusSize {
    Small,
    Medium,
    Large,
}

/// Setting the campus is located in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampusLocation {
    Urban,
    Suburban,
    Rural,
    Coastal,
}

// =============================================================================
// Nested Records
// =============================================================================

/// Published spread of an admissions test score (SAT, ACT, GRE)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Annual tuition for domestic and international students
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuitionFee {
    pub domestic: f64,
    pub international: f64,
    pub currency: String,
}

/// Annual living cost estimates at three lifestyle levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivingCost {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub currency: String,
}

// =============================================================================
// University
// =============================================================================

/// A single catalog record.
///
/// Field names on the wire follow the catalog JSON format (`minGPA`,
/// `tuitionFee`, `ieltsMin`, ...). Rankings and the "additional features"
/// block are optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub country: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    // Rankings & reputation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub subject_rankings: BTreeMap<String, u32>,

    // Academic requirements (GPA values are on the 4.0 scale)
    #[serde(rename = "minGPA")]
    pub min_gpa: f64,
    #[serde(rename = "avgGPA")]
    pub avg_gpa: f64,
    pub acceptance_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat_range: Option<ScoreRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub act_range: Option<ScoreRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gre_range: Option<ScoreRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ielts_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toefl_min: Option<f64>,

    // Financial information
    pub tuition_fee: TuitionFee,
    pub living_cost: LivingCost,
    pub financial_aid_available: bool,
    #[serde(default)]
    pub scholarship_opportunities: Vec<String>,

    // Academic programs
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub strong_departments: Vec<String>,
    pub research_opportunities: bool,

    // Student life & demographics
    pub total_students: u32,
    pub international_students: u32,
    /// Share of international students, 0-100
    pub international_percentage: f64,
    pub student_faculty_ratio: f64,
    pub campus_size: CampusSize,
    pub location: CampusLocation,

    // Outcomes (rates are 0-100)
    pub graduation_rate: f64,
    pub employment_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_salary: Option<f64>,

    // Additional features
    #[serde(default)]
    pub languages_of_instruction: Vec<String>,
    #[serde(default)]
    pub internship_programs: bool,
    #[serde(default)]
    pub coop_programs: bool,
    #[serde(default)]
    pub study_abroad_options: bool,
}

impl University {
    /// International tuition plus a medium living budget for one year.
    ///
    /// This is the figure every budget comparison is made against.
    pub fn total_annual_cost(&self) -> f64 {
        self.tuition_fee.international + self.living_cost.medium
    }
}

// =============================================================================
// Catalog - The In-Memory University Store
// =============================================================================

/// Ordered collection of universities with lookup indices.
///
/// Records keep their file order: that order is the tie-breaker when two
/// universities end up with the same match score.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) universities: Vec<University>,
    /// Position of each record in `universities`
    pub(crate) id_index: HashMap<UniversityId, usize>,
    /// Record positions grouped by exact country name, in file order
    pub(crate) country_index: BTreeMap<String, Vec<usize>>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a university by id
    pub fn get(&self, id: &str) -> Option<&University> {
        self.id_index.get(id).map(|&pos| &self.universities[pos])
    }

    /// All records in catalog order
    pub fn all(&self) -> &[University] {
        &self.universities
    }

    /// Universities whose `country` equals `country` exactly (case-sensitive)
    pub fn in_country(&self, country: &str) -> Vec<&University> {
        self.country_index
            .get(country)
            .map(|positions| positions.iter().map(|&pos| &self.universities[pos]).collect())
            .unwrap_or_default()
    }

    /// Distinct country names, sorted
    pub fn countries(&self) -> Vec<&str> {
        self.country_index.keys().map(String::as_str).collect()
    }

    /// Number of universities in the catalog
    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    /// Append a university and update the indices.
    ///
    /// A record with an id that is already present replaces the old record
    /// in place, keeping its position.
    pub fn insert(&mut self, university: University) {
        if let Some(&pos) = self.id_index.get(&university.id) {
            let country_changed = self.universities[pos].country != university.country;
            self.universities[pos] = university;
            if country_changed {
                self.rebuild_country_index();
            }
            return;
        }

        let pos = self.universities.len();
        self.id_index.insert(university.id.clone(), pos);
        self.country_index
            .entry(university.country.clone())
            .or_default()
            .push(pos);
        self.universities.push(university);
    }

    fn rebuild_country_index(&mut self) {
        self.country_index.clear();
        for (pos, university) in self.universities.iter().enumerate() {
            self.country_index
                .entry(university.country.clone())
                .or_default()
                .push(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": "edinburgh",
        "name": "University of Edinburgh",
        "country": "United Kingdom",
        "city": "Edinburgh",
        "minGPA": 3.2,
        "avgGPA": 3.6,
        "acceptanceRate": 40,
        "ieltsMin": 6.5,
        "tuitionFee": { "domestic": 9250, "international": 26500, "currency": "GBP" },
        "livingCost": { "low": 9000, "medium": 12000, "high": 16000, "currency": "GBP" },
        "financialAidAvailable": true,
        "researchOpportunities": true,
        "totalStudents": 35000,
        "internationalStudents": 14000,
        "internationalPercentage": 40,
        "studentFacultyRatio": 13,
        "campusSize": "large",
        "location": "urban",
        "graduationRate": 88,
        "employmentRate": 92
    }"#;

    #[test]
    fn test_deserialize_minimal_record() {
        let uni: University = serde_json::from_str(RECORD).unwrap();

        assert_eq!(uni.id, "edinburgh");
        assert_eq!(uni.min_gpa, 3.2);
        assert_eq!(uni.ielts_min, Some(6.5));
        assert_eq!(uni.toefl_min, None);
        assert_eq!(uni.campus_size, CampusSize::Large);
        assert_eq!(uni.location, CampusLocation::Urban);
        assert!(uni.programs.is_empty());
        assert!(!uni.internship_programs);
    }

    #[test]
    fn test_total_annual_cost_uses_international_and_medium() {
        let uni: University = serde_json::from_str(RECORD).unwrap();
        assert_eq!(uni.total_annual_cost(), 38500.0);
    }

    #[test]
    fn test_serialize_keeps_wire_names() {
        let uni: University = serde_json::from_str(RECORD).unwrap();
        let value = serde_json::to_value(&uni).unwrap();

        assert_eq!(value["minGPA"], 3.2);
        assert_eq!(value["tuitionFee"]["international"], 26500.0);
        assert!(value.get("state").is_none());
    }
}
