//! Selects and writes one of the output formats for a record.
use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::printable::{Printable, PrintableError, PrintableFormat};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error {0}")]
    IoError(#[from] io::Error),
    #[error("serde_json error {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Printable error {0}")]
    PrintableError(#[from] PrintableError),
    #[error("Raw output is not available for this record")]
    RawUnsupported,
}

/// How a command prints its result. Exactly one applies per invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputMode {
    /// A single field, looked up by name ignoring case.
    Field(String),
    /// RLP encoded bytes as hex.
    Raw,
    /// Pretty JSON.
    Json,
    /// Aligned `key value` rows.
    Table,
}

impl OutputMode {
    /// Field wins over raw, raw over JSON. Table if nothing is set.
    pub fn select(field: Option<&str>, raw: bool, json: bool) -> Self {
        match field {
            Some(field) if !field.is_empty() => OutputMode::Field(field.to_string()),
            _ if raw => OutputMode::Raw,
            _ if json => OutputMode::Json,
            _ => OutputMode::Table,
        }
    }
}

/// Writes a record in any mode other than [`OutputMode::Raw`], which depends on
/// the record type and is written by the caller.
pub fn write_record<W: Write, T: Serialize>(
    out: &mut W,
    record: &T,
    mode: &OutputMode,
) -> Result<(), OutputError> {
    match mode {
        OutputMode::Field(field) => {
            let printable = Printable::from_struct(record)?;
            writeln!(out, "{}", printable.get_or_nil(field))?;
        }
        OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(record)?)?,
        OutputMode::Table => {
            let printable = Printable::from_struct(record)?;
            writeln!(out, "{}", printable.columnize(&PrintableFormat::default()))?;
        }
        OutputMode::Raw => return Err(OutputError::RawUnsupported),
    }
    Ok(())
}
