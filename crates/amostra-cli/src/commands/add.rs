//! `amostra add` command.
//!
//! Registers a new sample. Categoria, fabricante and codigo are
//! required; everything else is optional.

use chrono::NaiveDate;
use clap::Args;

use amostra_config::AmostraConfig;
use amostra_service::ServiceError;
use amostra_types::{SampleFields, SampleStatus};

use crate::output;
use crate::shared;

/// Register a new sample.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Category of the sample.
    #[arg(long)]
    pub categoria: String,
    /// Manufacturer name.
    #[arg(long)]
    pub fabricante: String,
    /// Internal tracking code.
    #[arg(long)]
    pub codigo: String,
    /// Manufacturer part number.
    #[arg(long, default_value = "")]
    pub pn_fabricante: String,
    /// Intelbras part number.
    #[arg(long, default_value = "")]
    pub pn_intelbras: String,
    /// Serial number.
    #[arg(long, default_value = "")]
    pub sn: String,
    /// Kind of sample.
    #[arg(long, default_value = "")]
    pub tipo_amostra: String,
    /// Processing status.
    #[arg(long, default_value = "Pending", value_parser = ["Pending", "Processed", "Completed"])]
    pub status: String,
    /// Current physical location.
    #[arg(long, default_value = "")]
    pub localizacao: String,
    /// Project, POC or event.
    #[arg(long, default_value = "")]
    pub projeto_poc_evento: String,
    /// Person responsible.
    #[arg(long, default_value = "")]
    pub responsavel: String,
    /// Checkout date (YYYY-MM-DD, defaults to today).
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

/// Executes the add command.
pub async fn execute(args: &AddArgs, config: &AmostraConfig) -> anyhow::Result<()> {
    let status: SampleStatus = args.status.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
    let fields = SampleFields {
        categoria: args.categoria.clone(),
        fabricante: args.fabricante.clone(),
        codigo: args.codigo.clone(),
        pn_fabricante: args.pn_fabricante.clone(),
        pn_intelbras: args.pn_intelbras.clone(),
        sn: args.sn.clone(),
        tipo_amostra: args.tipo_amostra.clone(),
        status,
        localizacao: args.localizacao.clone(),
        projeto_poc_evento: args.projeto_poc_evento.clone(),
        responsavel: args.responsavel.clone(),
        data_saida: args
            .data_saida
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        data_retorno: args.data_retorno,
        observacoes: args.observacoes.clone(),
    };

    let service = shared::open_service(&args.db, config)?;
    match service.create(fields).await {
        Ok(sample) => {
            output::print_success(&format!(
                "Amostra '{}' adicionada com sucesso (id {})",
                sample.fields.codigo, sample.id
            ));
            Ok(())
        }
        Err(ServiceError::Validation { field }) => {
            output::print_error("Por favor, preencha os campos obrigatorios (Categoria, Fabricante, Codigo).");
            anyhow::bail!("required field is empty: {field}");
        }
        Err(e) => Err(anyhow::anyhow!("create error: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(db: String) -> AddArgs {
        AddArgs {
            categoria: "Sensor".to_string(),
            fabricante: "Acme".to_string(),
            codigo: "S-100".to_string(),
            pn_fabricante: String::new(),
            pn_intelbras: String::new(),
            sn: String::new(),
            tipo_amostra: String::new(),
            status: "Pending".to_string(),
            localizacao: String::new(),
            projeto_poc_evento: String::new(),
            responsavel: String::new(),
            data_saida: None,
            data_retorno: None,
            observacoes: None,
            db: Some(db),
        }
    }

    #[tokio::test]
    async fn add_valid_sample_succeeds() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("add.db").to_str().expect("u").to_string();
        assert!(execute(&args(db), &AmostraConfig::default()).await.is_ok());
    }

    #[tokio::test]
    async fn add_empty_codigo_fails() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("add2.db").to_str().expect("u").to_string();
        let mut args = args(db);
        args.codigo = String::new();
        assert!(execute(&args, &AmostraConfig::default()).await.is_err());
    }
}
