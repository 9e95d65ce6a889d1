//! Sample identity, status and record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AmostraError;

/// Unique identifier for a sample record, assigned by the store on
/// creation and never reused or mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SampleId(i64);

impl SampleId {
    /// Creates a new `SampleId`. Ids are positive integers.
    pub fn new(id: i64) -> Result<Self, AmostraError> {
        if id <= 0 {
            return Err(AmostraError::invalid_input(
                "sample id must be a positive integer",
            ));
        }
        Ok(Self(id))
    }

    /// Returns the raw integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SampleId {
    type Err = AmostraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .parse()
            .map_err(|_| AmostraError::invalid_input(format!("invalid sample id: {s}")))?;
        Self::new(raw)
    }
}

/// Processing status of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleStatus {
    /// Checked out, not yet processed.
    #[default]
    Pending,
    /// Currently being processed.
    Processed,
    /// Lifecycle finished.
    Completed,
}

impl SampleStatus {
    /// All valid status values, in selection order.
    pub const ALL: [SampleStatus; 3] = [
        SampleStatus::Pending,
        SampleStatus::Processed,
        SampleStatus::Completed,
    ];

    /// Returns the storage string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleStatus::Pending => "Pending",
            SampleStatus::Processed => "Processed",
            SampleStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for SampleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleStatus {
    type Err = AmostraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(SampleStatus::Pending),
            "Processed" => Ok(SampleStatus::Processed),
            "Completed" => Ok(SampleStatus::Completed),
            other => Err(AmostraError::invalid_input(format!(
                "status must be Pending, Processed or Completed, got: {other}"
            ))),
        }
    }
}

/// Mutable fields of a sample record.
///
/// `categoria`, `fabricante` and `codigo` must be non-empty at creation
/// time; the service layer enforces this before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleFields {
    /// Category of the hardware sample.
    pub categoria: String,
    /// Manufacturer name.
    pub fabricante: String,
    /// Internal tracking code.
    pub codigo: String,
    /// Manufacturer part number.
    #[serde(default)]
    pub pn_fabricante: String,
    /// Intelbras part number.
    #[serde(default)]
    pub pn_intelbras: String,
    /// Serial number.
    #[serde(default)]
    pub sn: String,
    /// Kind of sample (engineering, golden, etc.).
    #[serde(default)]
    pub tipo_amostra: String,
    /// Processing status.
    #[serde(default)]
    pub status: SampleStatus,
    /// Current physical location.
    #[serde(default)]
    pub localizacao: String,
    /// Project, POC or event the sample is assigned to.
    #[serde(default)]
    pub projeto_poc_evento: String,
    /// Person responsible for the sample.
    #[serde(default)]
    pub responsavel: String,
    /// Checkout date.
    pub data_saida: NaiveDate,
    /// Return date, once the sample comes back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_retorno: Option<NaiveDate>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

/// Persisted sample record with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Store-assigned identifier.
    pub id: SampleId,
    /// All mutable fields.
    pub fields: SampleFields,
}
