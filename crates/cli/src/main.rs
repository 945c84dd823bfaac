//! # Digger
//!
//! Command-line front end: single lookups, bulk runs and multi-server
//! comparisons driven through the external resolver.

mod bootstrap;
mod commands;
mod di;

use bootstrap::{init_logging, load_config};
use clap::{Parser, Subcommand};
use commands::{batch::BatchArgs, compare::CompareArgs, query::QueryArgs};
use di::UseCases;
use digger_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "digger")]
#[command(version)]
#[command(about = "DNS lookups, bulk runs and server comparisons")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Resolver binary
    #[arg(long, global = true)]
    binary: Option<String>,

    /// Per-try resolver timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single lookup
    Query(QueryArgs),
    /// Run many lookups from a file
    Batch(BatchArgs),
    /// Ask several servers the same question
    Compare(CompareArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        binary: cli.binary,
        timeout_secs: cli.timeout,
        log_level: cli.log_level,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        binary = %config.resolver.binary,
        timeout_secs = config.resolver.timeout_secs,
        "Configuration loaded"
    );

    let use_cases = UseCases::new(&config)?;

    match cli.command {
        Command::Query(args) => commands::query::run(&use_cases, args).await,
        Command::Batch(args) => commands::batch::run(&use_cases, args).await,
        Command::Compare(args) => commands::compare::run(&use_cases, args).await,
    }
}
