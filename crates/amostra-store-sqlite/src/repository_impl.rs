//! `SampleRepository` trait implementation for `SqliteSampleRepository`.

use async_trait::async_trait;
use rusqlite::params;

use amostra_store::{RepositoryError, SampleQuery, SampleRepository};
use amostra_types::{Sample, SampleFields, SampleId};

use crate::query_builder::build_find_all_query;
use crate::repository::SqliteSampleRepository;
use crate::row_mapping::{row_to_sample, OptionalExt};

/// Column list shared across all SELECT queries.
pub(crate) const COLS: &str = "\
    id, categoria, fabricante, codigo, pn_fabricante, \
    pn_intelbras, sn, tipo_amostra, status, localizacao, \
    projeto_poc_evento, responsavel, data_saida, data_retorno, observacoes";

/// Maps a `rusqlite::Error` to a `RepositoryError::Storage`.
fn map_sqlite_err(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: e.to_string(),
    }
}

#[async_trait]
impl SampleRepository for SqliteSampleRepository {
    async fn find_by_id(&self, id: SampleId) -> Result<Option<Sample>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM samples WHERE id = ?1");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let result = stmt
            .query_row(params![id.as_i64()], row_to_sample)
            .optional()
            .map_err(map_sqlite_err)?;
        Ok(result)
    }

    async fn find_all(&self, query: SampleQuery) -> Result<Vec<Sample>, RepositoryError> {
        tracing::debug!(?query, "querying samples");
        let conn = self.lock_conn()?;
        let (sql, param_values) = build_find_all_query(&query);
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let samples = stmt
            .query_map(params_refs.as_slice(), row_to_sample)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(samples)
    }

    async fn insert(&self, fields: &SampleFields) -> Result<SampleId, RepositoryError> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO samples (categoria, fabricante, codigo, pn_fabricante, \
             pn_intelbras, sn, tipo_amostra, status, localizacao, \
             projeto_poc_evento, responsavel, data_saida, data_retorno, observacoes) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                fields.categoria,
                fields.fabricante,
                fields.codigo,
                fields.pn_fabricante,
                fields.pn_intelbras,
                fields.sn,
                fields.tipo_amostra,
                fields.status.as_str(),
                fields.localizacao,
                fields.projeto_poc_evento,
                fields.responsavel,
                fields.data_saida,
                fields.data_retorno,
                fields.observacoes,
            ],
        )
        .map_err(map_sqlite_err)?;

        let raw_id = conn.last_insert_rowid();
        let id = SampleId::new(raw_id).map_err(|e| RepositoryError::Storage {
            message: format!("store assigned invalid id {raw_id}: {e}"),
        })?;
        tracing::info!(%id, codigo = %fields.codigo, "inserted sample");
        Ok(id)
    }

    async fn update(&self, sample: &Sample) -> Result<(), RepositoryError> {
        let conn = self.lock_conn()?;
        let f = &sample.fields;
        let affected = conn
            .execute(
                "UPDATE samples SET categoria=?2, fabricante=?3, codigo=?4, \
                 pn_fabricante=?5, pn_intelbras=?6, sn=?7, tipo_amostra=?8, \
                 status=?9, localizacao=?10, projeto_poc_evento=?11, \
                 responsavel=?12, data_saida=?13, data_retorno=?14, \
                 observacoes=?15 WHERE id=?1",
                params![
                    sample.id.as_i64(),
                    f.categoria,
                    f.fabricante,
                    f.codigo,
                    f.pn_fabricante,
                    f.pn_intelbras,
                    f.sn,
                    f.tipo_amostra,
                    f.status.as_str(),
                    f.localizacao,
                    f.projeto_poc_evento,
                    f.responsavel,
                    f.data_saida,
                    f.data_retorno,
                    f.observacoes,
                ],
            )
            .map_err(map_sqlite_err)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                id: sample.id.as_i64(),
            });
        }
        tracing::info!(id = %sample.id, codigo = %f.codigo, "updated sample");
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let conn = self.lock_conn()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM samples", [], |row| row.get(0))
            .map_err(map_sqlite_err)?;
        Ok(count as u64)
    }
}
