//! `amostra list` command.
//!
//! Lists samples, optionally filtered by a search text matched against
//! codigo, fabricante and categoria.

use clap::Args;

use amostra_config::AmostraConfig;
use amostra_store::SampleQuery;
use amostra_types::SampleStatus;

use crate::output;
use crate::shared;

/// List samples in stock.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search text (substring of codigo, fabricante or categoria).
    pub query: Option<String>,
    /// Filter by status.
    #[arg(long, value_parser = ["Pending", "Processed", "Completed"])]
    pub status: Option<String>,
    /// Maximum number of rows to print.
    #[arg(long)]
    pub limit: Option<u32>,
    /// Database path (defaults to the configured store path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the list command.
pub async fn execute(args: &ListArgs, config: &AmostraConfig) -> anyhow::Result<()> {
    let service = shared::open_service(&args.db, config)?;

    let mut query = SampleQuery::all();
    if let Some(text) = &args.query {
        query = query.with_text(text.clone());
    }
    if let Some(status) = &args.status {
        let status: SampleStatus = status.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
        query = query.with_status(status);
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }

    let samples = service
        .find(query)
        .await
        .map_err(|e| anyhow::anyhow!("store query: {e}"))?;

    if samples.is_empty() {
        output::print_warning("Nenhum registro encontrado.");
        return Ok(());
    }

    output::print_table(&samples);
    Ok(())
}
