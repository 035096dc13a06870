//! CLI administration tool for shortlink.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin -- create https://example.com
//! cargo run --bin admin -- show abc123
//! cargo run --bin admin -- delete abc123
//! cargo run --bin admin -- count
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `shortlink::config`); `DATABASE_URL` selects the database.

use shortlink::application::services::ShortLinkStore;
use shortlink::config;
use shortlink::domain::entities::UrlRecord;
use shortlink::error::AppError;
use shortlink::infrastructure::link_metrics::NoopMetrics;
use shortlink::infrastructure::persistence::{SqliteUrlRepository, db};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

type AdminStore = ShortLinkStore<SqliteUrlRepository, NoopMetrics>;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Create {
        /// URL to shorten
        original: String,
    },

    /// Show the record behind a short code
    Show {
        /// Short code
        short: String,
    },

    /// Delete a short code
    Delete {
        /// Short code
        short: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the number of stored URLs
    Count,

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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = db::connect(&config).await?;

    let store: AdminStore = ShortLinkStore::with_policy(
        Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone()))),
        Arc::new(NoopMetrics),
        config.code_policy(),
    );

    match cli.command {
        Commands::Create { original } => create_url(&store, &original).await?,
        Commands::Show { short } => show_url(&store, &short).await?,
        Commands::Delete { short, yes } => delete_url(&store, &short, yes).await?,
        Commands::Count => show_count(&store).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

async fn create_url(store: &AdminStore, original: &str) -> Result<()> {
    let record = store.create(original).await?;

    println!("{}", "Short link created".green().bold());
    println!();
    print_record(&record);

    Ok(())
}

async fn show_url(store: &AdminStore, short: &str) -> Result<()> {
    match store.get(short).await {
        Ok(record) => print_record(&record),
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "No URL for code".yellow(), short.cyan());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Deletes a short code after confirmation (default: No).
async fn delete_url(store: &AdminStore, short: &str, skip_confirm: bool) -> Result<()> {
    let record = match store.get(short).await {
        Ok(record) => record,
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "No URL for code".yellow(), short.cyan());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print_record(&record);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    // The code may have been deleted concurrently since the lookup above.
    match store.delete(short).await {
        Ok(()) => println!("{}", "Short link deleted".green().bold()),
        Err(AppError::NotFound { .. }) => println!("{}", "Already deleted".yellow()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

async fn show_count(store: &AdminStore) -> Result<()> {
    let count = store
        .count()
        .await
        .ok_or_else(|| anyhow::anyhow!("Failed to count stored URLs"))?;

    println!("  URLs: {}", count.to_string().bright_green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
        DbAction::Migrate => {
            db::run_migrations(pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

fn print_record(record: &UrlRecord) {
    println!("  ID:       {}", record.id.to_string().bright_black());
    println!("  Short:    {}", record.short.bright_yellow().bold());
    println!("  Original: {}", record.original.cyan());
    println!(
        "  Created:  {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
}
