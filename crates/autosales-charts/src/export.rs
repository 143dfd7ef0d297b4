//! CSV and JSON export of aggregated report tables.

use autosales_stats::GroupedSeries;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// HTTP content type for this format.
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Json | Self::PrettyJson => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "prettyjson" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// One `(statistic, key, value)` row, used when several tables share a file.
#[derive(Debug, Serialize)]
struct SeriesRecord<'a> {
    statistic: &'a str,
    key: &'a str,
    value: f64,
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for GroupedSeries {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record([&self.key_column, &self.value_column])?;
                for (label, value) in self.iter() {
                    let value = value.to_string();
                    wtr.write_record([label, value.as_str()])?;
                }
                finish_csv(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<GroupedSeries> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for series in self {
                    for (key, value) in series.iter() {
                        wtr.serialize(SeriesRecord {
                            statistic: &series.name,
                            key,
                            value,
                        })?;
                    }
                }
                finish_csv(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn series() -> GroupedSeries {
        GroupedSeries {
            name: "advertising_total_by_vehicle".to_string(),
            key_column: "Vehicle_Type".to_string(),
            value_column: "Advertising_Expenditure".to_string(),
            labels: vec!["Executive car".to_string(), "Sports car".to_string()],
            values: vec![110.0, 40.5],
        }
    }

    #[test]
    fn test_series_csv() {
        let csv = series().export_to_string(ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Vehicle_Type,Advertising_Expenditure");
        assert_eq!(lines[1], "Executive car,110");
        assert_eq!(lines[2], "Sports car,40.5");
    }

    #[test]
    fn test_series_json() {
        let json = series().export_to_string(ExportFormat::Json).unwrap();
        let parsed: GroupedSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.labels.len(), 2);
        assert!(json.contains("\"name\":\"advertising_total_by_vehicle\""));
    }

    #[test]
    fn test_many_series_csv() {
        let mut other = series();
        other.name = "recession_advertising_by_vehicle".to_string();
        let csv = vec![series(), other]
            .export_to_string(ExportFormat::Csv)
            .unwrap();

        assert!(csv.starts_with("statistic,key,value\n"));
        assert_eq!(csv.lines().count(), 5);
        assert!(csv.contains("recession_advertising_by_vehicle,Sports car,40.5"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = std::env::temp_dir().join(format!("autosales-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("series.csv");

        series().export_to_file(&path, ExportFormat::Csv).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Executive car,110"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[rstest]
    #[case("csv", ExportFormat::Csv, "csv")]
    #[case("JSON", ExportFormat::Json, "json")]
    #[case("pretty-json", ExportFormat::PrettyJson, "json")]
    fn test_format_parsing(
        #[case] input: &str,
        #[case] format: ExportFormat,
        #[case] extension: &str,
    ) {
        let parsed: ExportFormat = input.parse().unwrap();
        assert_eq!(parsed, format);
        assert_eq!(parsed.extension(), extension);
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::InvalidFormat(_))
        ));
    }
}
