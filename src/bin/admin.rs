//! CLI administration tool for golink.
//!
//! Manages links directly against the database, going through the same
//! [`LinkService`] rules as the web UI.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- link list
//!
//! # Create, inspect, rename and delete a link
//! cargo run --bin admin -- link create docs https://docs.example.com
//! cargo run --bin admin -- link show docs
//! cargo run --bin admin -- link update docs --name wiki --url https://wiki.example.com
//! cargo run --bin admin -- link delete wiki
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_PATH` (optional): SQLite database file, default `/tmp/golink.db`

use golink::config::DEFAULT_DATABASE_PATH;
use golink::infrastructure::persistence::database;
use golink::prelude::{LinkError, LinkService, SqliteLinkRepository, SqliteLinkService};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for managing golink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Show a single link
    Show {
        /// Link name
        name: String,
    },

    /// Create a new link
    Create {
        /// Link name
        name: String,

        /// Destination URL
        url: String,
    },

    /// Rename and/or re-target a link
    Update {
        /// Current link name
        old_name: String,

        /// New name (keeps the current name if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// New destination URL (keeps the current URL if omitted)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Link name
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let db_path = cli
        .db_path
        .or_else(|| std::env::var_os("DATABASE_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

    let pool = database::open(&db_path, 1)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Link { action } => {
            let service = LinkService::new(Arc::new(SqliteLinkRepository::new(pool.clone())));
            handle_link_action(action, &service).await?;
        }
        Commands::Db { action } => handle_db_action(action, &pool, &db_path).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &SqliteLinkService) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Show { name } => show_link(service, &name).await,
        LinkAction::Create { name, url } => create_link(service, &name, &url).await,
        LinkAction::Update {
            old_name,
            name,
            url,
        } => update_link(service, &old_name, name, url).await,
        LinkAction::Delete { name, yes } => delete_link(service, &name, yes).await,
    }
}

async fn list_links(service: &SqliteLinkService) -> Result<()> {
    let links = service.list().await?;

    if links.is_empty() {
        println!("{}", "No links found".yellow());
        return Ok(());
    }

    println!("{}", "Links".bright_blue().bold());
    println!();

    let width = links.iter().map(|l| l.name.chars().count()).max().unwrap_or(0);
    for link in &links {
        println!("  {:width$}  {}", link.name.cyan(), link.address, width = width);
    }

    println!();
    println!("Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

async fn show_link(service: &SqliteLinkService, name: &str) -> Result<()> {
    let link = service.read(name).await.map_err(describe)?;

    println!("  Name: {}", link.name.cyan());
    println!("  URL:  {}", link.address);

    Ok(())
}

async fn create_link(service: &SqliteLinkService, name: &str, url: &str) -> Result<()> {
    service.create(name, url).await.map_err(describe)?;

    println!("{} {} -> {}", "Created".green().bold(), name.cyan(), url);
    Ok(())
}

/// Applies a partial update; omitted parts keep their stored values.
async fn update_link(
    service: &SqliteLinkService,
    old_name: &str,
    name: Option<String>,
    url: Option<String>,
) -> Result<()> {
    if name.is_none() && url.is_none() {
        anyhow::bail!("Nothing to update: pass --name and/or --url");
    }

    let current = service.read(old_name).await.map_err(describe)?;
    let new_name = name.unwrap_or(current.name);
    let new_url = url.unwrap_or(current.address);

    service
        .update(old_name, &new_name, &new_url)
        .await
        .map_err(describe)?;

    println!(
        "{} {} -> {} ({})",
        "Updated".green().bold(),
        old_name.cyan(),
        new_name.cyan(),
        new_url
    );
    Ok(())
}

async fn delete_link(service: &SqliteLinkService, name: &str, skip_confirm: bool) -> Result<()> {
    let link = service.read(name).await.map_err(describe)?;

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} -> {}?", link.name, link.address))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    service.delete(name).await.map_err(describe)?;

    println!("{} {}", "Deleted".red().bold(), name.cyan());
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    pool: &Arc<SqlitePool>,
    db_path: &Path,
) -> Result<()> {
    match action {
        DbAction::Check => {
            database::ping(pool)
                .await
                .context("Database did not answer")?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let service = LinkService::new(Arc::new(SqliteLinkRepository::new(pool.clone())));
            let count = service.count().await?;

            println!("{}", "Database info".bright_blue().bold());
            println!("  Path:  {}", db_path.display());
            println!("  Links: {}", count.to_string().bright_white().bold());
        }
    }

    Ok(())
}

/// Turns a link error into a user-facing message.
fn describe(err: LinkError) -> anyhow::Error {
    match err {
        LinkError::InvalidName(name) => anyhow::anyhow!(
            "Invalid link name {:?}: must not be empty, contain whitespace, or contain any of \"/<>\"",
            name
        ),
        other => other.into(),
    }
}
