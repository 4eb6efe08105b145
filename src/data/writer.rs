//! Survey Writer Module
//! Serializes validated records back to CSV using Polars.

use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

use super::record::{SurveyRecord, COLUMN_NAMES};

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to create output file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Writes the cleaned table to the destination path, one headerless CSV
/// record per row, same 9-column layout the loader read. An existing file is
/// overwritten.
pub struct SurveyWriter;

impl SurveyWriter {
    pub fn write(table: &[SurveyRecord], path: &Path) -> Result<(), WriterError> {
        let mut df = Self::to_dataframe(table)?;

        let file = File::create(path)?;
        CsvWriter::new(file)
            .include_header(false)
            .finish(&mut df)?;

        Ok(())
    }

    /// Rebuild the wire-order DataFrame from the record fields.
    fn to_dataframe(table: &[SurveyRecord]) -> Result<DataFrame, PolarsError> {
        let mut columns: Vec<Vec<String>> = COLUMN_NAMES
            .iter()
            .map(|_| Vec::with_capacity(table.len()))
            .collect();

        for record in table {
            for (values, field) in columns.iter_mut().zip(record.fields()) {
                values.push(field.to_string());
            }
        }

        let df = DataFrame::new(
            COLUMN_NAMES
                .iter()
                .zip(columns)
                .map(|(name, values)| Column::new((*name).into(), values))
                .collect(),
        )?;

        Ok(df)
    }
}
