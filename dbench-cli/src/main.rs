use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dbench::config::Settings;
use dbench::db::Database;
use dbench::BenchmarkRunner;

/// Database access-pattern micro-benchmark over a blog-style schema.
#[derive(Parser, Debug)]
#[command(name = "dbench")]
#[command(
    about = "Benchmark write/read, join, many-to-many, relationship, aggregation, and pagination latency",
    long_about = None
)]
struct Args {
    /// Number of iterations for each benchmark phase
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Path to the SQLite database file, or ":memory:"
    #[arg(short, long)]
    database: Option<String>,

    /// Seed for the workload RNG; omitted means process entropy
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit the report as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dbench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let settings = Settings::new().context("Failed to load settings")?;

    let iterations = args.iterations.unwrap_or(settings.benchmark.iterations);
    let path = args.database.unwrap_or(settings.database.path);

    let db = Database::new(&path).context("Failed to create database")?;
    db.initialize()
        .context("Failed to initialize database schema")?;

    let runner = BenchmarkRunner::new(db);
    let report = match args.seed {
        Some(seed) => runner.run_seeded(iterations, seed)?,
        None => runner.run(iterations)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{report}");
    }

    Ok(())
}
