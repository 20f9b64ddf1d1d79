//! CLI administration tool for the shortener.
//!
//! Creates and resolves short codes and inspects the database without going
//! through the HTTP API. Always talks to PostgreSQL.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Resolve a code
//! cargo run --bin admin -- resolve aB3xZ9
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`),
//! plus `SHORTEN_MAX_ATTEMPTS` and `BASE_URL`.

use shortener::application::services::ShortenerService;
use shortener::config::{Config, StorageBackend, mask_connection_string};
use shortener::error::AppError;
use shortener::infrastructure::persistence::PgMappingStore;
use shortener::server::connect_pool;
use shortener::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create a short code for a URL
    Shorten {
        /// The long URL to shorten
        url: String,
    },

    /// Print the URL a short code points to
    Resolve {
        /// The 6-character short code
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type PgShortenerService = ShortenerService<PgMappingStore, RandomCodeGenerator>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    config.storage = StorageBackend::Postgres;
    config.validate()?;

    if let Some(ref url) = config.database_url {
        println!(
            "{}",
            format!("Database: {}", mask_connection_string(url)).bright_black()
        );
    }

    let pool = connect_pool(&config)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let service = ShortenerService::new(
        Arc::new(PgMappingStore::new(Arc::new(pool.clone()))),
        Arc::new(RandomCodeGenerator),
        config.shorten_max_attempts,
    );

    match cli.command {
        Commands::Shorten { url } => shorten(&service, &config, &url).await?,
        Commands::Resolve { code } => resolve(&service, &code).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Claims a new short code and prints it.
async fn shorten(service: &PgShortenerService, config: &Config, url: &str) -> Result<()> {
    println!("{}", "Shorten URL".bright_blue().bold());
    println!();

    let code = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("  Long URL:  {}", url.cyan());
    println!("  Code:      {}", code.bright_yellow().bold());

    if let Some(ref base_url) = config.base_url {
        println!(
            "  Short URL: {}/{}",
            base_url.trim_end_matches('/'),
            code.bright_yellow()
        );
    }

    println!();
    println!("{}", "Short code created".green().bold());

    Ok(())
}

/// Prints the URL behind a code, or reports that it does not exist.
async fn resolve(service: &PgShortenerService, code: &str) -> Result<()> {
    match service.resolve(code).await {
        Ok(long_url) => {
            println!("  {} -> {}", code.bright_yellow(), long_url.cyan());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("  No mapping for '{}'", code).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve code: {}", e)),
    }
}

/// Displays the number of stored mappings.
async fn handle_stats(service: &PgShortenerService) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let count = service
        .mapping_count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
