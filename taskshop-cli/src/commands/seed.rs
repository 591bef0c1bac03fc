//! Seed command: reset the tables and write export files

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use taskshop_server::db::{create_pool, migrations};
use taskshop_server::{seed, PgStore};

use super::DEFAULT_DATABASE_URL;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = DEFAULT_DATABASE_URL,
        hide_default_value = true,
        hide_env_values = true
    )]
    pub database_url: String,

    /// Directory receiving seed.log, users.csv and products.json
    #[arg(long, short = 'o', default_value = seed::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

/// Run the seed job against the configured database
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    println!("Starting database seeding...");

    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create tables")?;

    let store = PgStore::new(pool);
    let report = seed::run(&store, &args.output_dir)
        .await
        .context("Seeding failed")?;

    println!("Created {} users", report.seeded.users.len());
    println!("Created {} tasks", report.seeded.tasks.len());
    println!("Created {} products", report.seeded.products.len());
    println!("Log saved to: {}", report.log_path.display());
    println!("CSV saved to: {}", report.csv_path.display());
    println!("JSON saved to: {}", report.json_path.display());
    println!();
    println!("Seeding completed successfully!");
    println!("Output directory: {}", report.output_dir.display());

    Ok(())
}
