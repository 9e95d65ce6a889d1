//! Amostra CLI - Controle de Amostras.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod output;
pub(crate) mod shared;

/// Amostra - hardware sample inventory tracker.
#[derive(Debug, Parser)]
#[command(name = "amostra", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, value_parser = ["plain", "json"])]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List samples, optionally filtered by a search text.
    List(commands::list::ListArgs),
    /// Register a new sample.
    Add(commands::add::AddArgs),
    /// Edit an existing sample's fields.
    Edit(commands::edit::EditArgs),
    /// Show a single sample in full.
    Show(commands::show::ShowArgs),
    /// Show inventory statistics.
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = amostra_config::load_config(cli.config.as_deref())?;

    // Initialize tracing.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let log_format = cli
        .log_format
        .clone()
        .unwrap_or_else(|| config.logging.format.clone());
    match log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!("amostra starting with config: {:?}", cli.config);

    match &cli.command {
        Commands::List(args) => commands::list::execute(args, &config).await,
        Commands::Add(args) => commands::add::execute(args, &config).await,
        Commands::Edit(args) => commands::edit::execute(args, &config).await,
        Commands::Show(args) => commands::show::execute(args, &config).await,
        Commands::Status(args) => commands::status::execute(args, &config).await,
    }
}
