//! `amostra status` command.
//!
//! Displays inventory statistics per status and store location.

use clap::Args;

use amostra_config::AmostraConfig;
use amostra_store::SampleQuery;
use amostra_types::SampleStatus;

use crate::shared;

/// Show inventory statistics.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Database path (defaults to the configured store path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the status command.
pub async fn execute(args: &StatusArgs, config: &AmostraConfig) -> anyhow::Result<()> {
    let service = shared::open_service(&args.db, config)?;
    let samples = service
        .find(SampleQuery::all())
        .await
        .map_err(|e| anyhow::anyhow!("store query: {e}"))?;

    let db_path = shared::resolve_db_path(&args.db, config);
    let count_for = |status: SampleStatus| {
        samples
            .iter()
            .filter(|s| s.fields.status == status)
            .count()
    };
    let out = samples.iter().filter(|s| s.fields.data_retorno.is_none()).count();

    println!("Controle de Amostras");
    println!("{}", "─".repeat(40));
    println!("  Version   : {}", env!("CARGO_PKG_VERSION"));
    println!("  Database  : {db_path}");
    println!();
    println!("Inventory");
    println!("  Total     : {}", samples.len());
    println!("  Pending   : {}", count_for(SampleStatus::Pending));
    println!("  Processed : {}", count_for(SampleStatus::Processed));
    println!("  Completed : {}", count_for(SampleStatus::Completed));
    println!("  Checked out (no return date) : {out}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn status_empty_store() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("st.db").to_str().expect("u").to_string();
        let args = StatusArgs { db: Some(db) };
        assert!(execute(&args, &AmostraConfig::default()).await.is_ok());
    }
}
