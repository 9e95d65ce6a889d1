//! `amostra edit` command.
//!
//! Loads an existing sample, overlays the provided flags onto it and
//! writes all fields back. Unspecified fields keep their current value.

use chrono::NaiveDate;
use clap::Args;

use amostra_config::AmostraConfig;
use amostra_service::ServiceError;
use amostra_types::{SampleId, SampleStatus};

use crate::output;
use crate::shared;

/// Edit an existing sample.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Sample id to edit.
    pub id: SampleId,
    /// Category of the sample.
    #[arg(long)]
    pub categoria: Option<String>,
    /// Manufacturer name.
    #[arg(long)]
    pub fabricante: Option<String>,
    /// Internal tracking code.
    #[arg(long)]
    pub codigo: Option<String>,
    /// Manufacturer part number.
    #[arg(long)]
    pub pn_fabricante: Option<String>,
    /// Intelbras part number.
    #[arg(long)]
    pub pn_intelbras: Option<String>,
    /// Serial number.
    #[arg(long)]
    pub sn: Option<String>,
    /// Kind of sample.
    #[arg(long)]
    pub tipo_amostra: Option<String>,
    /// Processing status.
    #[arg(long, value_parser = ["Pending", "Processed", "Completed"])]
    pub status: Option<String>,
    /// Current physical location.
    #[arg(long)]
    pub localizacao: Option<String>,
    /// Project, POC or event.
    #[arg(long)]
    pub projeto_poc_evento: Option<String>,
    /// Person responsible.
    #[arg(long)]
    pub responsavel: Option<String>,
    /// Checkout date (YYYY-MM-DD).
    #[arg(long)]
    pub data_saida: Option<NaiveDate>,
    /// Return date (YYYY-MM-DD).
    #[arg(long)]
    pub data_retorno: Option<NaiveDate>,
    /// Free-form notes.
    #[arg(long)]
    pub observacoes: Option<String>,
    /// Database path (defaults to the configured store path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the edit command.
pub async fn execute(args: &EditArgs, config: &AmostraConfig) -> anyhow::Result<()> {
    let service = shared::open_service(&args.db, config)?;

    let existing = match service.get(args.id).await {
        Ok(sample) => sample,
        Err(ServiceError::NotFound { .. }) => {
            anyhow::bail!("Amostra nao encontrada: {}", args.id);
        }
        Err(e) => return Err(anyhow::anyhow!("store error: {e}")),
    };

    let mut fields = existing.fields;
    if let Some(v) = &args.categoria {
        fields.categoria = v.clone();
    }
    if let Some(v) = &args.fabricante {
        fields.fabricante = v.clone();
    }
    if let Some(v) = &args.codigo {
        fields.codigo = v.clone();
    }
    if let Some(v) = &args.pn_fabricante {
        fields.pn_fabricante = v.clone();
    }
    if let Some(v) = &args.pn_intelbras {
        fields.pn_intelbras = v.clone();
    }
    if let Some(v) = &args.sn {
        fields.sn = v.clone();
    }
    if let Some(v) = &args.tipo_amostra {
        fields.tipo_amostra = v.clone();
    }
    if let Some(v) = &args.status {
        let status: SampleStatus = v.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
        fields.status = status;
    }
    if let Some(v) = &args.localizacao {
        fields.localizacao = v.clone();
    }
    if let Some(v) = &args.projeto_poc_evento {
        fields.projeto_poc_evento = v.clone();
    }
    if let Some(v) = &args.responsavel {
        fields.responsavel = v.clone();
    }
    if let Some(v) = args.data_saida {
        fields.data_saida = v;
    }
    if let Some(v) = args.data_retorno {
        fields.data_retorno = Some(v);
    }
    if let Some(v) = &args.observacoes {
        fields.observacoes = Some(v.clone());
    }

    let updated = service
        .update(args.id, fields)
        .await
        .map_err(|e| anyhow::anyhow!("update error: {e}"))?;

    output::print_success(&format!(
        "Amostra '{}' atualizada com sucesso",
        updated.fields.codigo
    ));
    Ok(())
}
