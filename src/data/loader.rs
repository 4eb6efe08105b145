//! Survey Loader Module
//! Reads the raw survey export into records using Polars.

use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::record::{SurveyRecord, COLUMN_NAMES};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Loads the fixed 9-column survey export.
///
/// The export carries no reliable header, so the file is read headerless; a
/// header line that does slip through is just another record and gets thrown
/// out by validation. Content checks are deferred to the validator - the
/// loader only shapes the file into records.
pub struct SurveyLoader;

impl SurveyLoader {
    /// Read `path` into an ordered table of records.
    pub fn load(path: &Path) -> Result<Vec<SurveyRecord>, LoaderError> {
        // Force all nine columns to String up front so numeric-looking
        // columns keep their raw text and short records pad out with nulls.
        let schema = Schema::from_iter(
            COLUMN_NAMES
                .iter()
                .map(|name| Field::new((*name).into(), DataType::String)),
        );

        let df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_schema(Some(Arc::new(schema)))
            .with_truncate_ragged_lines(true)
            .finish()?
            .collect()?;

        Self::to_records(&df)
    }

    /// Convert the collected DataFrame into records, column by column.
    fn to_records(df: &DataFrame) -> Result<Vec<SurveyRecord>, LoaderError> {
        let timestamp = df.column("timestamp")?.str()?;
        let team = df.column("team")?.str()?;
        let coffee_spend = df.column("coffee_spend")?.str()?;
        let campus_days = df.column("campus_days")?.str()?;
        let purchase_location = df.column("purchase_location")?.str()?;
        let would_subscribe = df.column("would_subscribe")?.str()?;
        let decline_reason = df.column("decline_reason")?.str()?;
        let pay_amount = df.column("pay_amount")?.str()?;
        let email = df.column("email")?.str()?;

        let mut table = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            table.push(SurveyRecord {
                timestamp: cell(timestamp, i),
                team: cell(team, i),
                coffee_spend: cell(coffee_spend, i),
                campus_days: cell(campus_days, i),
                purchase_location: cell(purchase_location, i),
                would_subscribe: cell(would_subscribe, i),
                decline_reason: cell(decline_reason, i),
                pay_amount: cell(pay_amount, i),
                email: cell(email, i),
            });
        }

        Ok(table)
    }
}

/// A null cell (missing trailing field) reads as an empty string.
fn cell(column: &StringChunked, idx: usize) -> String {
    column.get(idx).unwrap_or_default().to_string()
}
