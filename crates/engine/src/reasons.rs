//! Human-readable match reasons.
//!
//! Reasons are generated independently of the score. Conditions are checked
//! in a fixed order and only the first `MAX_REASONS` that hold are kept.

use crate::scoring::{FieldMatch, match_field};
use catalog::University;
use profile::{Level, StudentProfile};
use std::fmt;

/// Most reasons attached to a single result
pub const MAX_REASONS: usize = 4;

/// International share (percent) above which a campus counts as diverse
pub const DIVERSITY_THRESHOLD: f64 = 20.0;

/// Employment rate (percent) above which outcomes count as excellent
pub const EMPLOYMENT_THRESHOLD: f64 = 90.0;

/// Why a university suits a student.
///
/// Variants are declared in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    StrongAcademicMatch,
    MeetsAcademicRequirements,
    WellWithinBudget,
    WithinBudget,
    FinancialAidAvailable,
    StrongInField,
    OffersProgram,
    DiverseCommunity,
    ExcellentEmployment,
    ResearchOpportunities,
    InternshipPrograms,
}

impl MatchReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchReason::StrongAcademicMatch => "Strong academic match",
            MatchReason::MeetsAcademicRequirements => "Meets academic requirements",
            MatchReason::WellWithinBudget => "Well within budget",
            MatchReason::WithinBudget => "Within budget",
            MatchReason::FinancialAidAvailable => "Financial aid available",
            MatchReason::StrongInField => "Strong in your field",
            MatchReason::OffersProgram => "Offers your program of study",
            MatchReason::DiverseCommunity => "Diverse international community",
            MatchReason::ExcellentEmployment => "Excellent employment outcomes",
            MatchReason::ResearchOpportunities => "Research opportunities available",
            MatchReason::InternshipPrograms => "Strong internship programs",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every reason that holds, in emission order (not truncated)
pub fn all_reasons(university: &University, profile: &StudentProfile) -> Vec<MatchReason> {
    let mut reasons = Vec::new();

    // Academic fit
    let gpa = profile.normalized_gpa();
    if gpa >= university.avg_gpa {
        reasons.push(MatchReason::StrongAcademicMatch);
    } else if gpa >= university.min_gpa {
        reasons.push(MatchReason::MeetsAcademicRequirements);
    }

    // Budget fit
    if let Some(budget) = profile.budget() {
        let ratio = budget / university.total_annual_cost();
        if ratio >= 1.2 {
            reasons.push(MatchReason::WellWithinBudget);
        } else if ratio >= 1.0 {
            reasons.push(MatchReason::WithinBudget);
        }
    }

    if profile.financial_aid_needed && university.financial_aid_available {
        reasons.push(MatchReason::FinancialAidAvailable);
    }

    match profile.field_of_study().map(|field| match_field(field, university)) {
        Some(FieldMatch::StrongDepartment) => reasons.push(MatchReason::StrongInField),
        Some(FieldMatch::Program) => reasons.push(MatchReason::OffersProgram),
        _ => {}
    }

    if university.international_percentage > DIVERSITY_THRESHOLD {
        reasons.push(MatchReason::DiverseCommunity);
    }

    if university.employment_rate > EMPLOYMENT_THRESHOLD {
        reasons.push(MatchReason::ExcellentEmployment);
    }

    if profile.research_opportunities && university.research_opportunities {
        reasons.push(MatchReason::ResearchOpportunities);
    }

    if profile.internship_importance == Level::High && university.internship_programs {
        reasons.push(MatchReason::InternshipPrograms);
    }

    reasons
}

/// The first `MAX_REASONS` reasons, as display strings
pub fn match_reasons(university: &University, profile: &StudentProfile) -> Vec<String> {
    all_reasons(university, profile)
        .into_iter()
        .take(MAX_REASONS)
        .map(|reason| reason.as_str().to_string())
        .collect()
}
