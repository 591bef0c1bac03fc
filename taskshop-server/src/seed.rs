//! One-shot seeding job
//!
//! Clears and repopulates users, tasks and products, then exports:
//! - `seed.log`: timestamp, creation counts and the seeded users
//! - `users.csv`: `ID,Name,Email`
//! - `products.json`: pretty-printed product array
//!
//! Not meant to run alongside live traffic against the same tables.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio::fs;

use crate::db::{DbError, SeedData, SeedTask, Seeded, Store};
use crate::models::{NewProduct, NewTask, NewUser, Product, User, ValidationError};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "seed_output";

pub const LOG_FILE: &str = "seed.log";
pub const USERS_CSV_FILE: &str = "users.csv";
pub const PRODUCTS_JSON_FILE: &str = "products.json";

/// Seed job error
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("invalid seed data: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a completed seed run
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub completed_at: DateTime<Local>,
    pub seeded: Seeded,
    pub output_dir: PathBuf,
    pub log_path: PathBuf,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

/// The fixed data set: five users, five tasks, five products.
pub fn seed_data() -> Result<SeedData, ValidationError> {
    let users = [
        ("Jan Kowalski", "jan@example.com"),
        ("Anna Nowak", "anna@example.com"),
        ("Piotr Wiśniewski", "piotr@example.com"),
        ("Maria Lewandowska", "maria@example.com"),
        ("Krzysztof Dąbrowski", "krzysztof@example.com"),
    ];

    // Owner is an index into `users`.
    let tasks = [
        ("Zrobić zakupy", false, 0),
        ("Napisać raport", true, 1),
        ("Umówić się na spotkanie", false, 0),
        ("Przeczytać książkę", false, 2),
        ("Zadzwonić do klienta", true, 3),
    ];

    let products = [
        ("Laptop", 2999.99, 15),
        ("Mysz", 89.99, 50),
        ("Klawiatura", 199.99, 30),
        ("Monitor", 899.99, 20),
        ("Słuchawki", 299.99, 40),
    ];

    Ok(SeedData {
        users: users
            .iter()
            .map(|(name, email)| NewUser::new(name, email))
            .collect::<Result<_, _>>()?,
        tasks: tasks
            .iter()
            .map(|&(title, completed, owner)| -> Result<SeedTask, ValidationError> {
                Ok(SeedTask {
                    task: NewTask::new(title, Some(completed), None)?,
                    owner,
                })
            })
            .collect::<Result<_, _>>()?,
        products: products
            .iter()
            .map(|&(name, price, stock)| NewProduct::new(name, price, Some(stock)))
            .collect::<Result<_, _>>()?,
    })
}

/// Reseed `store` and write the export files into `output_dir`.
pub async fn run(store: &dyn Store, output_dir: &Path) -> Result<SeedReport, SeedError> {
    let data = seed_data()?;

    tracing::info!("Clearing existing data and seeding...");
    let seeded = store.reseed(&data).await?;
    tracing::info!(
        users = seeded.users.len(),
        tasks = seeded.tasks.len(),
        products = seeded.products.len(),
        "Seed data committed"
    );

    fs::create_dir_all(output_dir).await.map_err(|source| SeedError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let completed_at = Local::now();

    let log_path = output_dir.join(LOG_FILE);
    write_file(&log_path, render_log(completed_at, &seeded)).await?;
    tracing::info!(path = %log_path.display(), "Log saved");

    let csv_path = output_dir.join(USERS_CSV_FILE);
    write_file(&csv_path, render_users_csv(&seeded.users)).await?;
    tracing::info!(path = %csv_path.display(), "CSV saved");

    let json_path = output_dir.join(PRODUCTS_JSON_FILE);
    write_file(&json_path, render_products_json(&seeded.products)?).await?;
    tracing::info!(path = %json_path.display(), "JSON saved");

    Ok(SeedReport {
        completed_at,
        seeded,
        output_dir: output_dir.to_path_buf(),
        log_path,
        csv_path,
        json_path,
    })
}

async fn write_file(path: &Path, contents: String) -> Result<(), SeedError> {
    fs::write(path, contents).await.map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn render_log(completed_at: DateTime<Local>, seeded: &Seeded) -> String {
    let mut log = format!(
        "Seed completed at: {}\n\
         Created {} users\n\
         Created {} tasks\n\
         Created {} products\n\
         \n=== Users ===\n",
        completed_at.format("%Y-%m-%d %H:%M:%S%.6f"),
        seeded.users.len(),
        seeded.tasks.len(),
        seeded.products.len(),
    );
    for user in &seeded.users {
        log.push_str(&format!(
            "ID: {}, Name: {}, Email: {}\n",
            user.id, user.name, user.email
        ));
    }
    log
}

fn render_users_csv(users: &[User]) -> String {
    let mut csv = String::from("ID,Name,Email\r\n");
    for user in users {
        csv.push_str(&format!(
            "{},{},{}\r\n",
            user.id,
            csv_field(&user.name),
            csv_field(&user.email)
        ));
    }
    csv
}

/// Quote a field when it holds a delimiter, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn render_products_json(products: &[Product]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(products)
}
