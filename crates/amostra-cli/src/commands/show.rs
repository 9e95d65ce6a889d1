//! `amostra show` command.
//!
//! Prints a single sample record in full.

use clap::Args;

use amostra_config::AmostraConfig;
use amostra_service::ServiceError;
use amostra_types::SampleId;

use crate::output;
use crate::shared;

/// Show a sample by id.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Sample id to display.
    pub id: SampleId,
    /// Database path (defaults to the configured store path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the show command.
pub async fn execute(args: &ShowArgs, config: &AmostraConfig) -> anyhow::Result<()> {
    let service = shared::open_service(&args.db, config)?;

    match service.get(args.id).await {
        Ok(sample) => {
            output::print_sample(&sample);
            Ok(())
        }
        Err(ServiceError::NotFound { .. }) => {
            anyhow::bail!("Amostra nao encontrada: {}", args.id);
        }
        Err(e) => Err(anyhow::anyhow!("store error: {e}")),
    }
}
