//! Ready-made records for tests and benchmarks.
//!
//! Compiled for this crate's own tests and for dependents that enable the
//! `fixtures` feature.

use crate::types::*;

/// A mid-range university in `country`.
///
/// minGPA 3.0, avgGPA 3.5, international tuition 20,000 plus medium living
/// cost 10,000 (total 30,000), no test thresholds, no strong departments.
/// Tests override the fields they care about.
pub fn university(id: &str, country: &str) -> University {
    University {
        id: id.to_string(),
        name: format!("University {id}"),
        country: country.to_string(),
        city: "Capital City".to_string(),
        state: None,
        global_rank: None,
        national_rank: None,
        subject_rankings: Default::default(),
        min_gpa: 3.0,
        avg_gpa: 3.5,
        acceptance_rate: 50.0,
        sat_range: None,
        act_range: None,
        gre_range: None,
        ielts_min: None,
        toefl_min: None,
        tuition_fee: TuitionFee {
            domestic: 10_000.0,
            international: 20_000.0,
            currency: "USD".to_string(),
        },
        living_cost: LivingCost {
            low: 8_000.0,
            medium: 10_000.0,
            high: 14_000.0,
            currency: "USD".to_string(),
        },
        financial_aid_available: false,
        scholarship_opportunities: Vec::new(),
        programs: Vec::new(),
        strong_departments: Vec::new(),
        research_opportunities: false,
        total_students: 20_000,
        international_students: 2_000,
        international_percentage: 10.0,
        student_faculty_ratio: 15.0,
        campus_size: CampusSize::Medium,
        location: CampusLocation::Suburban,
        graduation_rate: 80.0,
        employment_rate: 80.0,
        average_salary: None,
        languages_of_instruction: vec!["English".to_string()],
        internship_programs: false,
        coop_programs: false,
        study_abroad_options: false,
    }
}
