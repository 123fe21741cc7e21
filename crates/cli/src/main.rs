use anyhow::{Context, Result};
use catalog::DataPaths;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{Recommendation, RecommendationEngine, RecommendationSummary};
use pipeline::criteria::{DEFAULT_MAX_COST, DEFAULT_MIN_RATING, DEFAULT_TOP_N};
use pipeline::SearchCriteria;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// Tastebud - Restaurant Recommendation Engine
#[derive(Parser)]
#[command(name = "tastebud")]
#[command(about = "Content-based restaurant recommendations", long_about = None)]
struct Cli {
    /// Directory holding cleaned_data.csv and encoded_data.csv
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory holding cuisine_encoder.json and scaler.json
    #[arg(short, long, default_value = "models")]
    models_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend restaurants in a city
    Recommend {
        /// City to search in (exact match)
        #[arg(long)]
        city: String,

        /// Minimum rating, inclusive
        #[arg(long, default_value_t = DEFAULT_MIN_RATING)]
        min_rating: f32,

        /// Maximum cost for two, inclusive
        #[arg(long, default_value_t = DEFAULT_MAX_COST)]
        max_cost: f32,

        /// Preferred cuisine; repeat for several
        #[arg(long = "cuisine")]
        cuisines: Vec<String>,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List the cities in the catalog
    Cities,

    /// List the cuisines the encoder knows
    Cuisines,

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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!(
        "Loading restaurants from {} and models from {}...",
        cli.data_dir.display(),
        cli.models_dir.display()
    );
    let start = Instant::now();
    let paths = DataPaths::from_dirs(&cli.data_dir, &cli.models_dir);
    let engine = Arc::new(
        RecommendationEngine::load(&paths).context("Failed to start recommendation engine")?,
    );
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    match cli.command {
        Commands::Recommend {
            city,
            min_rating,
            max_cost,
            cuisines,
            top,
            format,
        } => {
            let criteria = SearchCriteria::new(city)
                .with_min_rating(min_rating)
                .with_max_cost(max_cost)
                .with_cuisines(cuisines)
                .with_top_n(top);
            handle_recommend(&engine, &criteria, format)?
        }
        Commands::Cities => handle_list("Cities", &engine.cities()),
        Commands::Cuisines => handle_list("Cuisines", &engine.cuisines()),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(engine, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine,
    criteria: &SearchCriteria,
    format: OutputFormat,
) -> Result<()> {
    let recommendations = engine.recommend(criteria)?;
    let summary = RecommendationSummary::from_recommendations(&recommendations);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "summary": summary,
                "recommendations": recommendations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => match summary {
            Some(summary) => {
                print_summary(&criteria.city, &summary);
                print_recommendations(&recommendations);
            }
            None => print_no_matches(criteria),
        },
    }
    Ok(())
}

/// Handle the 'cities' and 'cuisines' commands
fn handle_list(title: &str, items: &[String]) {
    println!("{}", format!("{} ({}):", title, items.len()).bold().blue());
    for item in items {
        println!("  {} {}", "•".green(), item);
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    engine: Arc<RecommendationEngine>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    let cities = engine.cities();
    let cuisines = engine.cuisines();
    if cities.is_empty() {
        println!("{}", "Catalog has no cities to benchmark against".yellow());
        return Ok(());
    }

    // Random city plus, half the time, one random cuisine
    let workload: Vec<SearchCriteria> = {
        let mut rng = rand::rng();
        (0..requests)
            .map(|_| {
                let city = cities.choose(&mut rng).cloned().unwrap_or_default();
                let criteria = SearchCriteria::new(city);
                match cuisines.choose(&mut rng) {
                    Some(cuisine) if rand::random::<bool>() => {
                        criteria.with_cuisines([cuisine.clone()])
                    }
                    _ => criteria,
                }
            })
            .collect()
    };

    info!(requests, concurrent, "Starting benchmark");

    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for criteria in workload {
        let engine = engine.clone();
        let permit = permits.clone().acquire_owned().await?;
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let start = Instant::now();
            engine.recommend(&criteria)?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    let mut timings = Vec::with_capacity(handles.len());
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    if timings.is_empty() {
        println!("No requests were made");
        return Ok(());
    }

    timings.sort();
    let percentile = |p: f64| -> Duration {
        let idx = ((timings.len() as f64 * p) as usize).min(timings.len() - 1);
        timings[idx]
    };
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let throughput = timings.len() as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn print_summary(city: &str, summary: &RecommendationSummary) {
    println!(
        "{}",
        format!("Found {} restaurants in {}", summary.found, city)
            .bold()
            .blue()
    );
    println!(
        "{}Median rating: {:.1}  Median ratings: {:.0}  Average cost: {:.0}  Best match: {:.0}%",
        "• ".cyan(),
        summary.median_rating,
        summary.median_rating_count,
        summary.mean_cost,
        summary.best_similarity * 100.0
    );
}

/// Format and print recommendations as a ranked table
fn print_recommendations(recommendations: &[Recommendation]) {
    println!(
        "{:>3}  {:<32} {:<28} {:>6} {:>8} {:>6} {:>6}",
        "#", "Name", "Cuisine", "Rating", "Ratings", "Cost", "Match"
    );
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{:>3}  {:<32} {:<28} {:>6.1} {:>8.0} {:>6.0} {:>5.0}%",
            (rank + 1).to_string().green(),
            truncate(&rec.name, 32),
            truncate(&rec.cuisine, 28),
            rec.rating,
            rec.rating_count,
            rec.cost,
            rec.similarity * 100.0
        );
    }
}

fn print_no_matches(criteria: &SearchCriteria) {
    println!(
        "{}",
        format!("No restaurants in {} match these filters.", criteria.city).yellow()
    );
    println!("Try one of:");
    println!(
        "  {} a lower minimum rating (currently {:.1})",
        "•".cyan(),
        criteria.min_rating
    );
    println!(
        "  {} a higher budget (currently {:.0})",
        "•".cyan(),
        criteria.max_cost
    );
    if !criteria.preferred_cuisines.is_empty() {
        println!(
            "  {} fewer cuisine preferences (currently {})",
            "•".cyan(),
            criteria.preferred_cuisines.join(", ")
        );
    }
}

/// Shorten `text` to at most `width` characters
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}
