//! The historical automobile sales table.
//!
//! The table is parsed once, cleaned, and then only read. Every report
//! derives transient frames from [`SalesTable::lazy`].

use crate::error::{DataError, Result};
use polars::prelude::*;
use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::Path;
use tracing::info;

/// Column names of the sales CSV used by the dashboard.
pub mod columns {
    /// Calendar year of the observation
    pub const YEAR: &str = "Year";
    /// Three letter month name (`Jan` .. `Dec`)
    pub const MONTH: &str = "Month";
    /// 1 during a recession period, 0 otherwise
    pub const RECESSION: &str = "Recession";
    /// Number of automobiles sold
    pub const AUTOMOBILE_SALES: &str = "Automobile_Sales";
    /// Vehicle category
    pub const VEHICLE_TYPE: &str = "Vehicle_Type";
    /// Advertising spend
    pub const ADVERTISING_EXPENDITURE: &str = "Advertising_Expenditure";
    /// Unemployment rate
    pub const UNEMPLOYMENT_RATE: &str = "unemployment_rate";

    /// Columns that must be present for the reports to run.
    pub const REQUIRED: &[&str] = &[
        YEAR,
        MONTH,
        RECESSION,
        AUTOMOBILE_SALES,
        VEHICLE_TYPE,
        ADVERTISING_EXPENDITURE,
    ];
}

/// Rewrite a raw vehicle type label into its display form.
///
/// The replacements run in order, so `Smallfamiliycar` first loses the typo
/// and then gains both spaces: `Small family car`.
pub fn normalize_vehicle_type(raw: &str) -> String {
    raw.replace("familiy", "family")
        .replace("family", " family")
        .replace("car", " car")
        .replace("Sports", "Sports car")
}

/// Read-only sales table.
#[derive(Debug, Clone)]
pub struct SalesTable {
    frame: DataFrame,
}

impl SalesTable {
    /// Parse CSV bytes (with header row) into a cleaned table.
    pub fn from_csv_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .into_reader_with_file_handle(Cursor::new(bytes.as_ref().to_vec()))
            .finish()?;

        Self::from_frame(frame)
    }

    /// Read a local CSV file into a cleaned table.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        info!(path = %path.as_ref().display(), bytes = bytes.len(), "reading sales CSV");
        Self::from_csv_bytes(bytes)
    }

    /// Wrap an existing frame, validating the required columns and
    /// normalizing vehicle type labels.
    pub fn from_frame(mut frame: DataFrame) -> Result<Self> {
        for column in columns::REQUIRED {
            if frame.get_column_index(column).is_none() {
                return Err(DataError::MissingColumn {
                    column: (*column).to_string(),
                });
            }
        }

        let cleaned: StringChunked = frame
            .column(columns::VEHICLE_TYPE)?
            .str()?
            .into_iter()
            .map(|value| value.map(normalize_vehicle_type))
            .collect();
        frame.with_column(
            cleaned
                .with_name(columns::VEHICLE_TYPE.into())
                .into_series(),
        )?;

        info!(rows = frame.height(), "loaded sales table");
        Ok(Self { frame })
    }

    /// The underlying frame.
    pub const fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A lazy view of the table for building derived frames.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Distinct years present in the table, ascending.
    pub fn years(&self) -> Result<Vec<i32>> {
        let years = self
            .frame
            .column(columns::YEAR)?
            .cast(&DataType::Int32)?;
        let distinct: BTreeSet<i32> = years.i32()?.into_iter().flatten().collect();
        Ok(distinct.into_iter().collect())
    }

    /// Distinct (normalized) vehicle types, ascending.
    pub fn vehicle_types(&self) -> Result<Vec<String>> {
        let distinct: BTreeSet<String> = self
            .frame
            .column(columns::VEHICLE_TYPE)?
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();
        Ok(distinct.into_iter().collect())
    }
}
