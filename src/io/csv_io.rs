use std::io::Read;
use std::path::Path;

use crate::analysis::{aggregate_subdivisions, recompute_derived};
use crate::error::ForecastError;
use crate::models::{ForecastSnapshot, PopulationRecord};

/// CSV row structure for the population history table.
///
/// `urbanization_rate` is accepted for round-trip convenience but ignored on
/// read; the loader recomputes it.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct HistoryRow {
    year: i32,
    total_population: f64,
    urban_population: f64,
    urbanization_rate: Option<f64>,
    natural_growth_rate: Option<f64>,
    mechanical_growth_rate: Option<f64>,
}

fn parse_csv_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<Vec<PopulationRecord>, ForecastError> {
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let row: HistoryRow = result?;
        records.push(PopulationRecord {
            year: row.year,
            total_population: row.total_population,
            urban_population: row.urban_population,
            urbanization_rate: 0.0,
            natural_growth_rate: row.natural_growth_rate.unwrap_or(0.0),
            mechanical_growth_rate: row.mechanical_growth_rate.unwrap_or(0.0),
        });
    }
    Ok(records)
}

fn snapshot_from_records(name: &str, records: Vec<PopulationRecord>) -> ForecastSnapshot {
    let first_year = records.first().map(|r| r.year).unwrap_or(0);
    let mut snapshot = ForecastSnapshot::new(name, first_year);
    snapshot.historical_population = records;
    recompute_derived(&mut snapshot);
    for issue in snapshot.validation_issues() {
        tracing::warn!(row = issue.row_index, field = %issue.field, "{}", issue.message);
    }
    snapshot
}

/// Read a population-history CSV into a fresh snapshot named after the file.
///
/// Labor history and subdivisions are not representable in this format; use
/// JSON or XLSX for full snapshots.
pub fn read_csv(path: impl AsRef<Path>) -> Result<ForecastSnapshot, ForecastError> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let records = parse_csv_records(&mut rdr)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    Ok(snapshot_from_records(&name, records))
}

/// Read a population-history CSV from bytes.
pub fn read_csv_from_bytes(data: &[u8], name: &str) -> Result<ForecastSnapshot, ForecastError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let records = parse_csv_records(&mut rdr)?;
    Ok(snapshot_from_records(name, records))
}

/// Write a snapshot's population history to a CSV file.
pub fn write_csv(snapshot: &ForecastSnapshot, path: impl AsRef<Path>) -> Result<(), ForecastError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    for record in &snapshot.historical_population {
        let row = HistoryRow {
            year: record.year,
            total_population: record.total_population,
            urban_population: record.urban_population,
            urbanization_rate: Some(record.urbanization_rate),
            natural_growth_rate: Some(record.natural_growth_rate),
            mechanical_growth_rate: Some(record.mechanical_growth_rate),
        };
        wtr.serialize(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the forecast report as CSV: project header, converted-population
/// results, and the subdivision listing with totals.
pub fn write_report_csv(
    snapshot: &ForecastSnapshot,
    path: impl AsRef<Path>,
) -> Result<(), ForecastError> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;

    wtr.write_record(["URBAN DEVELOPMENT FORECAST REPORT"])?;
    wtr.write_record(["Project", snapshot.name.as_str()])?;
    wtr.write_record(["Location", snapshot.location.as_str()])?;
    wtr.write_record(["Created", snapshot.created_at.as_str()])?;
    wtr.write_record([""])?;

    wtr.write_record(["POPULATION FORECAST"])?;
    wtr.write_record(["Stage", "Converted population"])?;
    wtr.write_record(["Current", snapshot.converted_population_current.to_string().as_str()])?;
    wtr.write_record(["10-year", snapshot.converted_population_10y.to_string().as_str()])?;
    wtr.write_record(["20-year", snapshot.converted_population_20y.to_string().as_str()])?;
    wtr.write_record(["50-year", snapshot.converted_population_50y.to_string().as_str()])?;
    wtr.write_record([""])?;

    wtr.write_record(["SUBDIVISIONS"])?;
    wtr.write_record([
        "Name",
        "Area (ha)",
        "Current population",
        "Approved project population",
    ])?;
    for sub in &snapshot.subdivisions {
        wtr.write_record([
            sub.name.as_str(),
            sub.area_ha.to_string().as_str(),
            sub.current_population.to_string().as_str(),
            sub.approved_project_population.to_string().as_str(),
        ])?;
    }
    let totals = aggregate_subdivisions(&snapshot.subdivisions);
    wtr.write_record([
        "TOTAL",
        totals.area_ha.to_string().as_str(),
        totals.current_population.to_string().as_str(),
        totals.approved_project_population.to_string().as_str(),
    ])?;

    wtr.flush()?;
    Ok(())
}
