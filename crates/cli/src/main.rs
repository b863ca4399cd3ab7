use advisor::{
    AdvisorConfig, ComparisonTable, Favorites, JsonFileStore, MatchTier, RecommendationService,
    format_currency,
};
use anyhow::{anyhow, Context, Result};
use catalog::University;
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use engine::ScoredUniversity;
use profile::{
    GradeSystem, Level, LocationPreference, ProfileDraft, ProfileUpdate, SizePreference,
    StudentProfile,
};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::warn;

/// Uni-Match - University Recommendation Engine
#[derive(Parser)]
#[command(name = "uni-match")]
#[command(about = "Match student profiles to universities in a chosen country", long_about = None)]
struct Cli {
    /// University catalog JSON file (overrides UNIMATCH_CATALOG)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Favorites store file (overrides UNIMATCH_FAVORITES)
    #[arg(long)]
    favorites: Option<PathBuf>,

    /// Artificial delay before each recommendation, in milliseconds
    /// (overrides UNIMATCH_LATENCY_MS)
    #[arg(long)]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend universities for a student profile
    Recommend {
        /// Country to search in (exact name, see `countries`)
        #[arg(long)]
        country: String,

        /// Student profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Override a profile answer, e.g. --set gpa=3.8 --set fieldOfStudy=Physics
        #[arg(long = "set", value_name = "KEY=VALUE")]
        updates: Vec<String>,

        /// Refuse to run unless field of study, grade and budget are filled in
        #[arg(long)]
        strict: bool,

        /// Show the sub-scores behind each match score
        #[arg(long)]
        explain: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List countries in the catalog
    Countries,

    /// Show full details for one university
    Show {
        /// University id
        #[arg(long)]
        id: String,
    },

    /// Compare universities side by side
    Compare {
        /// Comma-separated university ids
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        /// Student profile JSON file; adds a match score row
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Override a profile answer; adds a match score row
        #[arg(long = "set", value_name = "KEY=VALUE")]
        updates: Vec<String>,
    },

    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List saved universities
    List,
    /// Save a university
    Add {
        #[arg(long)]
        id: String,
    },
    /// Remove a saved university
    Remove {
        #[arg(long)]
        id: String,
    },
    /// Save if not saved, remove otherwise
    Toggle {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AdvisorConfig::load().context("Invalid configuration")?;
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    if let Some(path) = cli.favorites {
        config.favorites_path = path;
    }
    if let Some(millis) = cli.latency_ms {
        config.latency = Duration::from_millis(millis);
    }

    let start = Instant::now();
    let service = RecommendationService::from_config(&config)?;
    eprintln!(
        "{} Loaded {} universities in {:?}",
        "✓".green(),
        service.catalog().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            country,
            profile,
            updates,
            strict,
            explain,
            json,
        } => {
            let profile = build_profile(profile.as_deref(), &updates, strict)?;
            handle_recommend(&service, &country, &profile, explain, json).await?
        }
        Commands::Countries => handle_countries(&service),
        Commands::Show { id } => handle_show(&service, &id)?,
        Commands::Compare {
            ids,
            profile,
            updates,
        } => {
            let profile = if profile.is_some() || !updates.is_empty() {
                Some(build_profile(profile.as_deref(), &updates, false)?)
            } else {
                None
            };
            handle_compare(&service, &ids, profile.as_ref())?
        }
        Commands::Favorites { action } => {
            handle_favorites(&service, &config.favorites_path, action)?
        }
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, requests, concurrent).await?,
    }

    Ok(())
}

/// Assemble the profile from an optional file plus `--set` overrides
fn build_profile(path: Option<&Path>, updates: &[String], strict: bool) -> Result<StudentProfile> {
    let base = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?;
            StudentProfile::from_json_str(&json)
                .with_context(|| format!("Invalid profile {}", path.display()))?
        }
        None => StudentProfile::default(),
    };

    let mut draft = ProfileDraft::from_profile(base);
    for assignment in updates {
        let update = ProfileUpdate::parse_assignment(assignment)
            .with_context(|| format!("Invalid --set {}", assignment))?;
        draft.update(update);
    }

    if strict {
        return draft.submit().context("Profile is incomplete");
    }

    let missing = draft.missing_fields();
    if !missing.is_empty() {
        warn!("Profile is missing {}; neutral scores will be used", missing.join(", "));
    }
    Ok(draft.profile().clone())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    service: &RecommendationService,
    country: &str,
    profile: &StudentProfile,
    explain: bool,
    json: bool,
) -> Result<()> {
    let recommendations = service.recommend(country, profile).await?;

    if json {
        println!("{}", recommendations_json(&recommendations)?);
        return Ok(());
    }

    if recommendations.is_empty() {
        println!(
            "{}",
            format!("No universities in {} match this profile.", country).yellow()
        );
        return Ok(());
    }

    print_recommendations(&recommendations, country);

    if explain {
        println!();
        println!("{}", "Score breakdown:".bold().blue());
        for rec in &recommendations {
            if let Some(b) = service.explain(&rec.university.id, profile) {
                println!(
                    "  {}: academic {:.0}, financial {:.0}, field {:.0}, tests {:.0}, preferences {:.0}",
                    rec.university.name, b.academic, b.financial, b.field, b.tests, b.preferences
                );
            }
        }
    }
    Ok(())
}

/// The `--json` output of 'recommend': a JSON array and nothing else
fn recommendations_json(recommendations: &[ScoredUniversity]) -> Result<String> {
    serde_json::to_string_pretty(recommendations).context("Failed to encode recommendations")
}

/// Handle the 'countries' command
fn handle_countries(service: &RecommendationService) {
    println!("{}", "Countries:".bold().blue());
    for country in service.countries() {
        let count = service.catalog().in_country(&country).len();
        println!("{}{} ({} universities)", "• ".green(), country, count);
    }
}

/// Handle the 'show' command
fn handle_show(service: &RecommendationService, id: &str) -> Result<()> {
    let uni = service
        .university(id)
        .ok_or_else(|| anyhow!("University {} not found", id))?;

    println!("{}", uni.name.bold().blue());
    let location = match &uni.state {
        Some(state) => format!("{}, {}, {}", uni.city, state, uni.country),
        None => format!("{}, {}", uni.city, uni.country),
    };
    println!("{}{}", "• ".green(), location);
    if let Some(rank) = uni.global_rank {
        println!("{}Global rank: #{}", "• ".green(), rank);
    }
    if let Some(rank) = uni.national_rank {
        println!("{}National rank: #{}", "• ".green(), rank);
    }

    println!("{}", "Admissions".bold());
    println!("{}Acceptance rate: {}%", "• ".cyan(), uni.acceptance_rate);
    println!("{}GPA: min {}, average {}", "• ".cyan(), uni.min_gpa, uni.avg_gpa);
    if let Some(min) = uni.ielts_min {
        println!("{}IELTS minimum: {}", "• ".cyan(), min);
    }
    if let Some(min) = uni.toefl_min {
        println!("{}TOEFL minimum: {}", "• ".cyan(), min);
    }
    if let Some(range) = &uni.sat_range {
        println!("{}SAT: {}-{} (avg {})", "• ".cyan(), range.min, range.max, range.avg);
    }
    if let Some(range) = &uni.gre_range {
        println!("{}GRE: {}-{} (avg {})", "• ".cyan(), range.min, range.max, range.avg);
    }

    println!("{}", "Costs (per year)".bold());
    let currency = &uni.tuition_fee.currency;
    println!(
        "{}Tuition: {}",
        "• ".cyan(),
        format_currency(uni.tuition_fee.international, currency)
    );
    println!(
        "{}Living: {}",
        "• ".cyan(),
        format_currency(uni.living_cost.medium, &uni.living_cost.currency)
    );
    println!(
        "{}Total: {}",
        "• ".cyan(),
        format_currency(uni.total_annual_cost(), currency)
    );
    if uni.financial_aid_available {
        println!("{}Financial aid available", "• ".cyan());
    }
    for scholarship in &uni.scholarship_opportunities {
        println!("  - {}", scholarship);
    }

    println!("{}", "Academics".bold());
    if !uni.strong_departments.is_empty() {
        println!("{}Strong in: {}", "• ".cyan(), uni.strong_departments.join(", "));
    }
    if !uni.programs.is_empty() {
        println!("{}Programs: {}", "• ".cyan(), uni.programs.join(", "));
    }
    for (subject, rank) in &uni.subject_rankings {
        println!("  - {} #{}", subject, rank);
    }

    println!("{}", "Student life & outcomes".bold());
    println!(
        "{}{} students, {}% international",
        "• ".cyan(),
        uni.total_students,
        uni.international_percentage
    );
    println!(
        "{}Graduation {}%, employment {}%",
        "• ".cyan(),
        uni.graduation_rate,
        uni.employment_rate
    );
    if let Some(salary) = uni.average_salary {
        println!(
            "{}Average salary: {}",
            "• ".cyan(),
            format_currency(salary, currency)
        );
    }
    let extras: Vec<&str> = [
        (uni.internship_programs, "internships"),
        (uni.coop_programs, "co-op"),
        (uni.study_abroad_options, "study abroad"),
        (uni.research_opportunities, "research"),
    ]
    .iter()
    .filter(|(offered, _)| *offered)
    .map(|(_, name)| *name)
    .collect();
    if !extras.is_empty() {
        println!("{}Offers: {}", "• ".cyan(), extras.join(", "));
    }
    Ok(())
}

/// Handle the 'compare' command
///
/// With a profile, each university is scored (without eligibility
/// filtering) and the table gains a match score row.
fn handle_compare(
    service: &RecommendationService,
    ids: &[String],
    profile: Option<&StudentProfile>,
) -> Result<()> {
    let not_found = |id: &str| anyhow!("University {} not found", id);

    let table = match profile {
        Some(profile) => {
            let scored = ids
                .iter()
                .map(|id| service.score(id.trim(), profile).ok_or_else(|| not_found(id.as_str())))
                .collect::<Result<Vec<ScoredUniversity>>>()?;
            ComparisonTable::from_scored(&scored)
        }
        None => {
            let universities = ids
                .iter()
                .map(|id| service.university(id.trim()).ok_or_else(|| not_found(id.as_str())))
                .collect::<Result<Vec<&University>>>()?;
            ComparisonTable::new(&universities)
        }
    };

    print_table(&table);
    Ok(())
}

/// Handle the 'favorites' command
fn handle_favorites(
    service: &RecommendationService,
    store_path: &Path,
    action: FavoritesAction,
) -> Result<()> {
    let mut favorites = Favorites::load(JsonFileStore::new(store_path))
        .context("Failed to open favorites")?;

    let lookup = |id: &str| -> Result<University> {
        service
            .university(id)
            .cloned()
            .ok_or_else(|| anyhow!("University {} not found", id))
    };

    match action {
        FavoritesAction::List => {
            if favorites.is_empty() {
                println!("No favorites saved yet.");
            }
            for (i, uni) in favorites.list().iter().enumerate() {
                println!(
                    "{}. {} ({}, {})",
                    (i + 1).to_string().green(),
                    uni.name,
                    uni.city,
                    uni.country
                );
            }
        }
        FavoritesAction::Add { id } => {
            if favorites.add(lookup(&id)?)? {
                println!("{} Saved {}", "✓".green(), id);
            } else {
                println!("{} is already a favorite", id);
            }
        }
        FavoritesAction::Remove { id } => {
            if favorites.remove(&id)? {
                println!("{} Removed {}", "✓".green(), id);
            } else {
                println!("{} was not a favorite", id);
            }
        }
        FavoritesAction::Toggle { id } => {
            if favorites.toggle(lookup(&id)?)? {
                println!("{} Saved {}", "✓".green(), id);
            } else {
                println!("{} Removed {}", "✓".green(), id);
            }
        }
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    service: RecommendationService,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    let countries = service.countries();
    if countries.is_empty() || requests == 0 {
        return Err(anyhow!("Benchmark needs a non-empty catalog and at least one request"));
    }

    // Generate random profiles up front
    let workload: Vec<(String, StudentProfile)> = {
        let mut rng = rand::rng();
        (0..requests)
            .map(|_| {
                let country = countries[rng.random_range(0..countries.len())].clone();
                (country, random_profile(&mut rng))
            })
            .collect()
    };

    let service = Arc::new(service);
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    let mut handles = vec![];
    for (country, profile) in workload {
        let service = service.clone();
        let permits = permits.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            service.recommend(&country, &profile).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn random_profile(rng: &mut impl Rng) -> StudentProfile {
    const FIELDS: [&str; 5] = ["Computer Science", "Engineering", "Medicine", "Business", "Law"];
    const LEVELS: [Level; 3] = [Level::Low, Level::Medium, Level::High];
    const LOCATIONS: [LocationPreference; 5] = [
        LocationPreference::Urban,
        LocationPreference::Suburban,
        LocationPreference::Rural,
        LocationPreference::Coastal,
        LocationPreference::Any,
    ];
    const SIZES: [SizePreference; 4] = [
        SizePreference::Small,
        SizePreference::Medium,
        SizePreference::Large,
        SizePreference::Any,
    ];

    StudentProfile {
        field_of_study: Some(FIELDS[rng.random_range(0..FIELDS.len())].to_string()),
        gpa: Some(rng.random_range(2.0..4.0)),
        grade_system: GradeSystem::Gpa,
        ielts: rng.random_bool(0.7).then(|| rng.random_range(5.5..9.0)),
        annual_budget: Some(rng.random_range(15_000.0..90_000.0)),
        financial_aid_needed: rng.random_bool(0.3),
        location_preference: LOCATIONS[rng.random_range(0..LOCATIONS.len())],
        university_size: SIZES[rng.random_range(0..SIZES.len())],
        internship_importance: LEVELS[rng.random_range(0..LEVELS.len())],
        research_opportunities: rng.random_bool(0.5),
        ..StudentProfile::default()
    }
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[ScoredUniversity], country: &str) {
    println!(
        "{}",
        format!("Top {} matches in {}:", recommendations.len(), country).bold().blue()
    );
    for (i, rec) in recommendations.iter().enumerate() {
        let uni = &rec.university;
        println!(
            "{}. {} ({}) - {} {}",
            (i + 1).to_string().green(),
            uni.name,
            uni.city,
            tier_colored(rec.match_score, format!("{}%", rec.match_score)),
            MatchTier::from_score(rec.match_score).label().dimmed()
        );
        println!(
            "   Tuition {} | Living {} | Total {}",
            format_currency(uni.tuition_fee.international, &uni.tuition_fee.currency),
            format_currency(uni.living_cost.medium, &uni.living_cost.currency),
            format_currency(uni.total_annual_cost(), &uni.tuition_fee.currency)
        );
        for reason in &rec.match_reasons {
            println!("   {}{}", "• ".cyan(), reason);
        }
    }
}

fn tier_colored(score: u8, text: String) -> ColoredString {
    match MatchTier::from_score(score) {
        MatchTier::Excellent => text.green().bold(),
        MatchTier::Strong => text.blue().bold(),
        MatchTier::Good => text.yellow().bold(),
        MatchTier::Fair => text.normal(),
    }
}

fn print_table(table: &ComparisonTable) {
    let label_width = table.rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
    let column_widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(col, name)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.values.get(col))
                .map(|value| value.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut header = format!("{:label_width$}", "Criteria");
    for (name, width) in table.columns.iter().zip(&column_widths) {
        header.push_str(&format!("  {:width$}", name, width = *width));
    }
    println!("{}", header.bold().blue());

    for row in &table.rows {
        let mut line = format!("{:label_width$}", row.label);
        for (value, width) in row.values.iter().zip(&column_widths) {
            line.push_str(&format!("  {:width$}", value, width = *width));
        }
        println!("{}", line);
    }
}
