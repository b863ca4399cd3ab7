//! Side-by-side comparison of universities.

use crate::format::{format_currency, group_thousands};
use catalog::University;
use engine::ScoredUniversity;

/// Strong departments listed before the rest are summarised
const DEPARTMENTS_SHOWN: usize = 3;

/// One criterion with a value per university
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// Criteria rows for a set of universities, one column per university.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTable {
    /// University names, in column order
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn new(universities: &[&University]) -> Self {
        let columns = universities.iter().map(|u| u.name.clone()).collect();
        let row = |label: &'static str, cell: fn(&University) -> String| ComparisonRow {
            label,
            values: universities.iter().map(|&u| cell(u)).collect(),
        };

        let rows = vec![
            row("Location", |u| format!("{}, {}", u.city, u.country)),
            row("Global Rank", |u| {
                u.global_rank
                    .map(|rank| format!("#{rank}"))
                    .unwrap_or_else(|| "N/A".to_string())
            }),
            row("Acceptance Rate", |u| format!("{}%", u.acceptance_rate)),
            row("Min GPA", |u| u.min_gpa.to_string()),
            row("IELTS Minimum", |u| {
                u.ielts_min
                    .map(|min| min.to_string())
                    .unwrap_or_else(|| "N/A".to_string())
            }),
            row("Annual Tuition", |u| {
                format_currency(u.tuition_fee.international, &u.tuition_fee.currency)
            }),
            row("Living Cost", |u| {
                format_currency(u.living_cost.medium, &u.living_cost.currency)
            }),
            row("Total Annual Cost", |u| {
                format_currency(u.total_annual_cost(), &u.tuition_fee.currency)
            }),
            row("Total Students", |u| group_thousands(u64::from(u.total_students))),
            row("International %", |u| format!("{}%", u.international_percentage)),
            row("Employment Rate", |u| format!("{}%", u.employment_rate)),
            row("Financial Aid", |u| {
                if u.financial_aid_available {
                    "Available".to_string()
                } else {
                    "Not Available".to_string()
                }
            }),
            row("Strong Departments", strong_departments),
        ];

        Self { columns, rows }
    }

    /// Comparison of scored results, with the match score as the first row
    pub fn from_scored(results: &[ScoredUniversity]) -> Self {
        let universities: Vec<&University> = results.iter().map(|r| &r.university).collect();
        let mut table = Self::new(&universities);
        table.rows.insert(
            0,
            ComparisonRow {
                label: "Match Score",
                values: results.iter().map(|r| format!("{}%", r.match_score)).collect(),
            },
        );
        table
    }

    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

fn strong_departments(university: &University) -> String {
    let departments = &university.strong_departments;
    let shown = departments
        .iter()
        .take(DEPARTMENTS_SHOWN)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    if departments.len() > DEPARTMENTS_SHOWN {
        format!("{shown} +{} more", departments.len() - DEPARTMENTS_SHOWN)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::fixtures::university;

    fn departments(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_rows_and_columns() {
        let mut a = university("a", "Canada");
        a.global_rank = Some(21);
        a.ielts_min = Some(6.5);
        a.financial_aid_available = true;
        let b = university("b", "Germany");

        let table = ComparisonTable::new(&[&a, &b]);

        assert_eq!(table.columns, vec!["University a", "University b"]);
        assert_eq!(table.rows.len(), 13);
        assert_eq!(table.row("Global Rank").unwrap().values, vec!["#21", "N/A"]);
        assert_eq!(table.row("IELTS Minimum").unwrap().values, vec!["6.5", "N/A"]);
        assert_eq!(table.row("Total Annual Cost").unwrap().values[0], "$30,000");
        assert_eq!(table.row("Total Students").unwrap().values[1], "20,000");
        assert_eq!(
            table.row("Financial Aid").unwrap().values,
            vec!["Available", "Not Available"]
        );
        assert_eq!(table.row("Location").unwrap().values[1], "Capital City, Germany");
    }

    #[test]
    fn test_strong_departments_are_summarised() {
        let mut uni = university("a", "Canada");
        uni.strong_departments = departments(&["Law", "Medicine", "Physics", "History", "Art"]);
        assert_eq!(strong_departments(&uni), "Law, Medicine, Physics +2 more");

        uni.strong_departments = departments(&["Law", "Medicine"]);
        assert_eq!(strong_departments(&uni), "Law, Medicine");
    }

    #[test]
    fn test_from_scored_adds_match_row() {
        let results = vec![ScoredUniversity {
            university: university("a", "Canada"),
            match_score: 87,
            match_reasons: Vec::new(),
        }];

        let table = ComparisonTable::from_scored(&results);

        assert_eq!(table.rows[0].label, "Match Score");
        assert_eq!(table.rows[0].values, vec!["87%"]);
        assert_eq!(table.rows.len(), 14);
    }
}
