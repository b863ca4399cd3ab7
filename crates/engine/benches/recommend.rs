//! Benchmarks for the recommendation engine
//!
//! Run with: cargo bench --package engine
//!
//! Uses a synthetic catalog so the numbers don't depend on the data file.

use catalog::University;
use catalog::fixtures::university;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use engine::{FilterPipeline, MatchScorer, RecommendationEngine};
use profile::{LocationPreference, StudentProfile};

const COUNTRIES: [&str; 4] = ["Canada", "Germany", "United Kingdom", "United States"];

fn synthetic_catalog(size: usize) -> Vec<University> {
    (0..size)
        .map(|i| {
            let mut uni = university(&format!("u{i}"), COUNTRIES[i % COUNTRIES.len()]);
            uni.min_gpa = 2.5 + (i % 10) as f64 * 0.1;
            uni.avg_gpa = uni.min_gpa + 0.4;
            uni.tuition_fee.international = 10_000.0 + (i % 40) as f64 * 1_000.0;
            uni.international_percentage = (i % 50) as f64;
            uni.strong_departments = vec!["Engineering".to_string(), "Physics".to_string()];
            uni.programs = vec!["Mathematics".to_string(), "Computer Science".to_string()];
            uni
        })
        .collect()
}

fn test_profile() -> StudentProfile {
    StudentProfile {
        field_of_study: Some("Computer Science".to_string()),
        gpa: Some(3.6),
        ielts: Some(7.0),
        annual_budget: Some(45_000.0),
        location_preference: LocationPreference::Urban,
        research_opportunities: true,
        ..StudentProfile::default()
    }
}

fn bench_recommend(c: &mut Criterion) {
    let catalog = synthetic_catalog(2_000);
    let profile = test_profile();
    let engine = RecommendationEngine::new();

    c.bench_function("recommend_2000", |b| {
        b.iter(|| {
            let results = engine.recommend(black_box("Canada"), black_box(&profile), &catalog);
            black_box(results)
        })
    });
}

fn bench_eligibility(c: &mut Criterion) {
    let catalog = synthetic_catalog(2_000);
    let profile = test_profile();
    let pipeline = FilterPipeline::eligibility("Canada");

    c.bench_function("eligibility_2000", |b| {
        b.iter(|| {
            let eligible = pipeline.apply(catalog.iter().collect(), black_box(&profile));
            black_box(eligible.len())
        })
    });
}

fn bench_score_all(c: &mut Criterion) {
    let catalog = synthetic_catalog(2_000);
    let candidates: Vec<&University> = catalog.iter().collect();
    let profile = test_profile();
    let scorer = MatchScorer::default();

    c.bench_function("score_all_2000", |b| {
        b.iter(|| {
            let breakdowns = scorer.score_all(black_box(&candidates), &profile);
            black_box(breakdowns)
        })
    });
}

criterion_group!(benches, bench_recommend, bench_eligibility, bench_score_all);
criterion_main!(benches);
