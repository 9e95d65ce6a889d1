//! Record service over an abstract sample repository.

use std::sync::Arc;

use amostra_store::{RepositoryError, SampleQuery, SampleRepository};
use amostra_types::{Sample, SampleFields, SampleId};

use crate::error::ServiceError;

/// The record service: search, create and update over a repository.
///
/// Owns no state beyond the repository handle; the process entry point
/// constructs the repository and passes it in.
pub struct SampleService {
    repo: Arc<dyn SampleRepository>,
}

impl SampleService {
    /// Creates a service over the given repository.
    pub fn new(repo: Arc<dyn SampleRepository>) -> Self {
        Self { repo }
    }

    /// Returns all samples whose `codigo`, `fabricante` or `categoria`
    /// contains `text` as a substring. Empty text matches all records.
    pub async fn search(&self, text: &str) -> Result<Vec<Sample>, ServiceError> {
        tracing::debug!(text, "searching samples");
        let samples = self.repo.find_all(SampleQuery::all().with_text(text)).await?;
        Ok(samples)
    }

    /// Returns all samples matching the given query.
    pub async fn find(&self, query: SampleQuery) -> Result<Vec<Sample>, ServiceError> {
        Ok(self.repo.find_all(query).await?)
    }

    /// Fetches a single sample by id.
    pub async fn get(&self, id: SampleId) -> Result<Sample, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id: id.as_i64() })
    }

    /// Validates and registers a new sample, returning the stored record.
    ///
    /// `categoria`, `fabricante` and `codigo` must be non-empty; on a
    /// validation failure nothing is written.
    pub async fn create(&self, fields: SampleFields) -> Result<Sample, ServiceError> {
        validate_required(&fields)?;
        let id = self.repo.insert(&fields).await?;
        tracing::info!(%id, codigo = %fields.codigo, "sample registered");
        Ok(Sample { id, fields })
    }

    /// Overwrites all mutable fields of an existing sample.
    ///
    /// Loads the record first and fails with `NotFound` if the id does
    /// not exist; the caller overlays whichever fields it wants changed
    /// before calling.
    pub async fn update(&self, id: SampleId, fields: SampleFields) -> Result<Sample, ServiceError> {
        // Existence check up front so a missing id is reported the same
        // way regardless of the store's affected-row accounting.
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound { id: id.as_i64() });
        }
        let sample = Sample { id, fields };
        match self.repo.update(&sample).await {
            Ok(()) => {
                tracing::info!(%id, codigo = %sample.fields.codigo, "sample updated");
                Ok(sample)
            }
            Err(RepositoryError::NotFound { id }) => Err(ServiceError::NotFound { id }),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the total number of stored samples.
    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.repo.count().await?)
    }
}

/// Checks the three required fields for non-empty content.
fn validate_required(fields: &SampleFields) -> Result<(), ServiceError> {
    let required = [
        ("categoria", &fields.categoria),
        ("fabricante", &fields.fabricante),
        ("codigo", &fields.codigo),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ServiceError::Validation { field });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use amostra_types::SampleStatus;
    use chrono::NaiveDate;

    fn fields() -> SampleFields {
        SampleFields {
            categoria: "Sensor".to_string(),
            fabricante: "Acme".to_string(),
            codigo: "S-100".to_string(),
            pn_fabricante: String::new(),
            pn_intelbras: String::new(),
            sn: String::new(),
            tipo_amostra: String::new(),
            status: SampleStatus::Pending,
            localizacao: String::new(),
            projeto_poc_evento: String::new(),
            responsavel: String::new(),
            data_saida: NaiveDate::from_ymd_opt(2024, 3, 15).expect("date"),
            data_retorno: None,
            observacoes: None,
        }
    }

    #[test]
    fn complete_fields_pass_validation() {
        assert!(validate_required(&fields()).is_ok());
    }

    #[test]
    fn empty_categoria_rejected() {
        let mut f = fields();
        f.categoria = String::new();
        let err = validate_required(&f).unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "categoria" }));
    }

    #[test]
    fn whitespace_fabricante_rejected() {
        let mut f = fields();
        f.fabricante = "   ".to_string();
        let err = validate_required(&f).unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "fabricante" }));
    }

    #[test]
    fn empty_codigo_rejected() {
        let mut f = fields();
        f.codigo = String::new();
        let err = validate_required(&f).unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "codigo" }));
    }
}
