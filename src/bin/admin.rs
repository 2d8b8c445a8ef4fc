//! CLI administration tool for shorty.
//!
//! Reads and writes the registry file directly, without going through the
//! HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Register a shorthand
//! cargo run --bin admin -- add foo https://bar.local/
//!
//! # Resolve a shorthand
//! cargo run --bin admin -- get foo
//!
//! # Check that the database opens and answers
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DB_PATH`: database file (default `./urls.db`)
//! - `BASE_HOST`: host name used when printing short URLs (default `easy.xyz`)

use shorty::api::dto::add::{shorthand_problem, target_problem};
use shorty::prelude::*;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing shorty.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the DB (will be created, if it does not exist)
    #[arg(long = "db", env = "DB_PATH", default_value = "./urls.db", global = true)]
    db_path: PathBuf,

    /// Host domain name used in printed short URLs
    #[arg(long = "url", env = "BASE_HOST", default_value = "easy.xyz", global = true)]
    host: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Register a new shorthand
    Add {
        /// The short key
        shorthand: String,

        /// The URL to redirect to
        target: String,
    },

    /// Show the target of a shorthand
    Get {
        /// The short key (leading slashes are ignored)
        shorthand: String,
    },

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let repository = Arc::new(
        SqliteUrlRepository::open(&cli.db_path)
            .await
            .with_context(|| format!("Failed to open database {}", cli.db_path.display()))?,
    );
    let registry = RegistryService::new(repository.clone(), cli.host);

    let result = match cli.command {
        Commands::Add { shorthand, target } => add(&registry, shorthand, target).await,
        Commands::Get { shorthand } => get(&registry, &shorthand).await,
        Commands::Db {
            action: DbAction::Check,
        } => check(&registry, &cli.db_path).await,
    };

    repository.close().await;
    result
}

async fn add(registry: &Registry, shorthand: String, target: String) -> Result<()> {
    if let Some(reason) = shorthand_problem(&shorthand).or_else(|| target_problem(&target)) {
        anyhow::bail!("{reason}");
    }

    match registry.insert(Entry::new(shorthand, target)).await {
        Ok(entry) => {
            println!("{}", "✓ Entry added".green().bold());
            println!(
                "  {} → {}",
                registry.short_url(&entry.shorthand).cyan(),
                entry.target
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e.to_string().red());
            Err(e.into())
        }
    }
}

async fn get(registry: &Registry, shorthand: &str) -> Result<()> {
    match registry.lookup(shorthand).await {
        Ok(target) => {
            println!("{}", target);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e.to_string().red());
            Err(e.into())
        }
    }
}

async fn check(registry: &Registry, db_path: &std::path::Path) -> Result<()> {
    print!("Checking database {}... ", db_path.display());

    if registry.health_check().await {
        println!("{}", "✓ OK".green().bold());
        Ok(())
    } else {
        println!("{}", "✗ FAILED".red().bold());
        anyhow::bail!("Database did not answer")
    }
}
