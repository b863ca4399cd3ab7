//! Catalog building and validation.
//!
//! Loading goes through three steps:
//! 1. Decode the records (see `parser`)
//! 2. Validate them (unique ids, sane ranges)
//! 3. Insert them in file order, building the id and country indices

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading university catalog from {:?}", path);
        let universities = parser::parse_file(path)?;
        let catalog = Self::from_universities(universities)?;
        info!(
            "Loaded {} universities across {} countries",
            catalog.len(),
            catalog.country_index.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_universities(parser::parse_universities(json)?)
    }

    /// Validate and index a list of records, keeping their order
    pub fn from_universities(universities: Vec<University>) -> Result<Self> {
        validate_records(&universities)?;

        let mut catalog = Catalog::new();
        for university in universities {
            catalog.insert(university);
        }
        Ok(catalog)
    }

    /// Validate every record currently held by the catalog
    pub fn validate(&self) -> Result<()> {
        validate_records(&self.universities)
    }
}

/// Check that:
/// - ids are unique
/// - `minGPA <= avgGPA`, both within 0.0 - 4.0
/// - costs are not negative
/// - percentage fields are within 0 - 100
fn validate_records(universities: &[University]) -> Result<()> {
    let mut seen = HashSet::new();
    for uni in universities {
        if !seen.insert(uni.id.as_str()) {
            return Err(CatalogError::DuplicateId { id: uni.id.clone() });
        }
        validate_record(uni)?;
    }
    Ok(())
}

fn validate_record(uni: &University) -> Result<()> {
    let invalid = |field: &str, value: f64| CatalogError::InvalidValue {
        id: uni.id.clone(),
        field: field.to_string(),
        value: value.to_string(),
    };

    for (field, gpa) in [("minGPA", uni.min_gpa), ("avgGPA", uni.avg_gpa)] {
        if !(0.0..=4.0).contains(&gpa) {
            return Err(invalid(field, gpa));
        }
    }
    if uni.min_gpa > uni.avg_gpa {
        return Err(invalid("minGPA", uni.min_gpa));
    }

    let costs = [
        ("tuitionFee.domestic", uni.tuition_fee.domestic),
        ("tuitionFee.international", uni.tuition_fee.international),
        ("livingCost.low", uni.living_cost.low),
        ("livingCost.medium", uni.living_cost.medium),
        ("livingCost.high", uni.living_cost.high),
    ];
    for (field, cost) in costs {
        if cost < 0.0 || cost.is_nan() {
            return Err(invalid(field, cost));
        }
    }

    let percentages = [
        ("acceptanceRate", uni.acceptance_rate),
        ("internationalPercentage", uni.international_percentage),
        ("graduationRate", uni.graduation_rate),
        ("employmentRate", uni.employment_rate),
    ];
    for (field, pct) in percentages {
        if !(0.0..=100.0).contains(&pct) {
            return Err(invalid(field, pct));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::university;
    use std::io::Write;

    #[test]
    fn test_from_universities_keeps_order() {
        let catalog = Catalog::from_universities(vec![
            university("b", "Canada"),
            university("a", "Canada"),
            university("c", "Germany"),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.all().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        let canada: Vec<_> = catalog.in_country("Canada").iter().map(|u| u.id.as_str()).collect();
        assert_eq!(canada, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::from_universities(vec![
            university("dup", "Canada"),
            university("dup", "Germany"),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId { id } if id == "dup"));
    }

    #[test]
    fn test_min_gpa_above_avg_rejected() {
        let mut uni = university("odd", "Canada");
        uni.min_gpa = 3.8;
        uni.avg_gpa = 3.2;

        let err = Catalog::from_universities(vec![uni]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { field, .. } if field == "minGPA"));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut uni = university("cheap", "Canada");
        uni.living_cost.medium = -1.0;

        let err = Catalog::from_universities(vec![uni]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { field, .. } if field == "livingCost.medium"));
    }

    #[test]
    fn test_percentage_out_of_range_rejected() {
        let mut uni = university("over", "Canada");
        uni.employment_rate = 101.0;

        assert!(Catalog::from_universities(vec![uni]).is_err());
    }

    #[test]
    fn test_load_from_file_roundtrip() {
        let universities = vec![university("x", "France"), university("y", "France")];
        let json = serde_json::to_string_pretty(&universities).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.countries(), vec!["France"]);
        assert_eq!(catalog.get("y").unwrap().id, "y");
    }
}
