//! Row-to-domain mapping for the SQLite sample repository.
//!
//! Converts raw SQLite rows into `Sample` domain objects and provides
//! the `OptionalExt` helper for query results.

use chrono::NaiveDate;

use amostra_types::{Sample, SampleFields, SampleId, SampleStatus};

/// Maps a SQLite row to a `Sample` domain object.
pub(crate) fn row_to_sample(row: &rusqlite::Row<'_>) -> rusqlite::Result<Sample> {
    let raw_id: i64 = row.get(0)?;
    let categoria: String = row.get(1)?;
    let fabricante: String = row.get(2)?;
    let codigo: String = row.get(3)?;
    let pn_fabricante: String = row.get(4)?;
    let pn_intelbras: String = row.get(5)?;
    let sn: String = row.get(6)?;
    let tipo_amostra: String = row.get(7)?;
    let status_str: String = row.get(8)?;
    let localizacao: String = row.get(9)?;
    let projeto_poc_evento: String = row.get(10)?;
    let responsavel: String = row.get(11)?;
    let data_saida: NaiveDate = row.get(12)?;
    let data_retorno: Option<NaiveDate> = row.get(13)?;
    let observacoes: Option<String> = row.get(14)?;

    let id = SampleId::new(raw_id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Integer, Box::new(e))
    })?;

    // A row with an unknown status string is corrupt; surface it as a
    // conversion failure instead of silently defaulting.
    let status: SampleStatus = status_str.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Sample {
        id,
        fields: SampleFields {
            categoria,
            fabricante,
            codigo,
            pn_fabricante,
            pn_intelbras,
            sn,
            tipo_amostra,
            status,
            localizacao,
            projeto_poc_evento,
            responsavel,
            data_saida,
            data_retorno,
            observacoes,
        },
    })
}

/// Extension trait for optional query results.
pub(crate) trait OptionalExt<T> {
    /// Converts a "no rows" error into `Ok(None)`.
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
