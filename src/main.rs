//! `golink` server binary.

use clap::Parser;
use golink::config::{self, Config, ConfigOverrides};
use golink::server;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Go-link redirector with a small management UI.
#[derive(Parser)]
#[command(name = "golink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Port to listen on (the PORT environment variable takes precedence)
    #[arg(long)]
    port: Option<u16>,

    /// Canonical host name used for absolute https redirects
    #[arg(long)]
    host_name: Option<String>,
}

impl From<Cli> for ConfigOverrides {
    fn from(cli: Cli) -> Self {
        Self {
            database_path: cli.db_path,
            port: cli.port,
            host_name: cli.host_name,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load(cli.into())?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
