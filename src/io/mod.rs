mod csv_io;
mod json_io;
mod excel_io;

use std::path::Path;

use crate::error::ForecastError;
use crate::models::ForecastSnapshot;

pub use csv_io::{read_csv, read_csv_from_bytes, write_csv, write_report_csv};
pub use json_io::{read_json, read_json_from_bytes, write_json};
pub use excel_io::{read_excel, read_excel_from_bytes, write_excel};

/// Trait for reading forecast snapshot data from a file.
pub trait SnapshotReader {
    fn read(&self, path: &Path) -> Result<ForecastSnapshot, ForecastError>;
}

/// Trait for writing forecast snapshot data to a file.
pub trait SnapshotWriter {
    fn write(&self, snapshot: &ForecastSnapshot, path: &Path) -> Result<(), ForecastError>;
}

/// CSV format reader/writer (population history table).
pub struct CsvFormat;

impl SnapshotReader for CsvFormat {
    fn read(&self, path: &Path) -> Result<ForecastSnapshot, ForecastError> {
        read_csv(path)
    }
}

impl SnapshotWriter for CsvFormat {
    fn write(&self, snapshot: &ForecastSnapshot, path: &Path) -> Result<(), ForecastError> {
        write_csv(snapshot, path)
    }
}

/// JSON format reader/writer (full snapshot wire format).
pub struct JsonFormat {
    pub pretty: bool,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl SnapshotReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<ForecastSnapshot, ForecastError> {
        read_json(path)
    }
}

impl SnapshotWriter for JsonFormat {
    fn write(&self, snapshot: &ForecastSnapshot, path: &Path) -> Result<(), ForecastError> {
        write_json(snapshot, path, self.pretty)
    }
}

/// Excel (.xlsx) format reader/writer (history sheets in, report workbook out).
pub struct ExcelFormat;

impl SnapshotReader for ExcelFormat {
    fn read(&self, path: &Path) -> Result<ForecastSnapshot, ForecastError> {
        read_excel(path)
    }
}

impl SnapshotWriter for ExcelFormat {
    fn write(&self, snapshot: &ForecastSnapshot, path: &Path) -> Result<(), ForecastError> {
        write_excel(snapshot, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{apply_edit, Edit, PopulationField};

    fn sample_snapshot() -> ForecastSnapshot {
        let mut snapshot = ForecastSnapshot::new("IO Trait Test", 2020);
        for row in 0..5 {
            snapshot = apply_edit(
                &snapshot,
                Edit::SetPopulationField {
                    row,
                    field: PopulationField::TotalPopulation,
                    value: 10_000.0 * (row as f64 + 1.0),
                },
            );
        }
        snapshot
    }

    #[test]
    fn test_csv_trait_roundtrip() {
        let snapshot = sample_snapshot();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.csv");

        let writer: &dyn SnapshotWriter = &CsvFormat;
        writer.write(&snapshot, &path).unwrap();

        let reader: &dyn SnapshotReader = &CsvFormat;
        let loaded = reader.read(&path).unwrap();

        assert_eq!(loaded.historical_population, snapshot.historical_population);
    }

    #[test]
    fn test_json_trait_roundtrip() {
        let snapshot = sample_snapshot();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.json");

        let writer: &dyn SnapshotWriter = &JsonFormat { pretty: true };
        writer.write(&snapshot, &path).unwrap();

        let reader: &dyn SnapshotReader = &JsonFormat::default();
        let loaded = reader.read(&path).unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_excel_trait_roundtrip() {
        let snapshot = sample_snapshot();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.xlsx");

        let writer: &dyn SnapshotWriter = &ExcelFormat;
        writer.write(&snapshot, &path).unwrap();

        let reader: &dyn SnapshotReader = &ExcelFormat;
        let loaded = reader.read(&path).unwrap();

        assert_eq!(loaded.historical_population, snapshot.historical_population);
    }

    #[test]
    fn test_json_format_default() {
        let fmt = JsonFormat::default();
        assert!(!fmt.pretty);
    }
}
