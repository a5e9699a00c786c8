use std::path::Path;

use calamine::{open_workbook, DataType, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::analysis::{aggregate_subdivisions, recompute_derived};
use crate::error::ForecastError;
use crate::models::{ForecastSnapshot, LaborRecord, PopulationRecord};

const POPULATION_SHEET: &str = "Population";
const LABOR_SHEET: &str = "Labor";
const FORECAST_SHEET: &str = "Forecast";
const SUBDIVISION_SHEET: &str = "Subdivisions";

/// Read forecast history data from an Excel (.xlsx) workbook.
///
/// Expects a `Population` sheet (or, failing that, the first sheet) with
/// columns: year, total_population, urban_population, urbanization_rate,
/// natural_growth_rate, mechanical_growth_rate. An optional `Labor` sheet
/// carries: year, sector1, sector2, sector3. Forecast results are not
/// imported; run the forecast after loading.
pub fn read_excel(path: impl AsRef<Path>) -> Result<ForecastSnapshot, ForecastError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_names = workbook.sheet_names().to_vec();
    let population_sheet = if sheet_names.iter().any(|s| s == POPULATION_SHEET) {
        POPULATION_SHEET.to_string()
    } else {
        sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ForecastError::Excel("No sheets found in workbook".to_string()))?
    };

    let range = workbook
        .worksheet_range(&population_sheet)
        .map_err(|e| ForecastError::Excel(e.to_string()))?;

    let mut population = Vec::new();
    let mut rows = range.rows();

    // Skip header row
    rows.next();

    for row in rows {
        if row.len() < 3 {
            continue;
        }

        let get_f64 = |idx: usize| -> f64 { row.get(idx).and_then(|c| c.get_float()).unwrap_or(0.0) };

        population.push(PopulationRecord {
            year: get_f64(0) as i32,
            total_population: get_f64(1),
            urban_population: get_f64(2),
            urbanization_rate: 0.0,
            natural_growth_rate: get_f64(4),
            mechanical_growth_rate: get_f64(5),
        });
    }

    let mut labor = Vec::new();
    if sheet_names.iter().any(|s| s == LABOR_SHEET) {
        let range = workbook
            .worksheet_range(LABOR_SHEET)
            .map_err(|e| ForecastError::Excel(e.to_string()))?;
        let mut rows = range.rows();
        rows.next();
        for row in rows {
            if row.len() < 2 {
                continue;
            }
            let get_f64 =
                |idx: usize| -> f64 { row.get(idx).and_then(|c| c.get_float()).unwrap_or(0.0) };
            labor.push(LaborRecord {
                year: get_f64(0) as i32,
                sector1: get_f64(1),
                sector2: get_f64(2),
                sector3: get_f64(3),
            });
        }
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let first_year = population.first().map(|r| r.year).unwrap_or(0);
    let mut snapshot = ForecastSnapshot::new(name, first_year);
    snapshot.historical_population = population;
    if !labor.is_empty() {
        snapshot.historical_labor = labor;
    }
    recompute_derived(&mut snapshot);
    for issue in snapshot.validation_issues() {
        tracing::warn!(row = issue.row_index, field = %issue.field, "{}", issue.message);
    }

    Ok(snapshot)
}

/// Read forecast history data from Excel bytes.
pub fn read_excel_from_bytes(data: &[u8], name: &str) -> Result<ForecastSnapshot, ForecastError> {
    use std::io::Write;
    let mut tmp = tempfile::NamedTempFile::new()?;
    tmp.write_all(data)?;
    tmp.flush()?;
    let mut snapshot = read_excel(tmp.path())?;
    snapshot.name = name.to_string();
    Ok(snapshot)
}

/// Write a snapshot to an Excel (.xlsx) report workbook with Population,
/// Labor, Forecast, and Subdivisions sheets.
pub fn write_excel(
    snapshot: &ForecastSnapshot,
    path: impl AsRef<Path>,
) -> Result<(), ForecastError> {
    let mut workbook = Workbook::new();

    // Population history
    let sheet = workbook.add_worksheet();
    sheet.set_name(POPULATION_SHEET)?;
    let headers = [
        "year",
        "total_population",
        "urban_population",
        "urbanization_rate",
        "natural_growth_rate",
        "mechanical_growth_rate",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (idx, record) in snapshot.historical_population.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_number(row, 0, record.year as f64)?;
        sheet.write_number(row, 1, record.total_population)?;
        sheet.write_number(row, 2, record.urban_population)?;
        sheet.write_number(row, 3, record.urbanization_rate)?;
        sheet.write_number(row, 4, record.natural_growth_rate)?;
        sheet.write_number(row, 5, record.mechanical_growth_rate)?;
    }

    // Labor history
    let sheet = workbook.add_worksheet();
    sheet.set_name(LABOR_SHEET)?;
    for (col, header) in ["year", "sector1", "sector2", "sector3"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (idx, record) in snapshot.historical_labor.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_number(row, 0, record.year as f64)?;
        sheet.write_number(row, 1, record.sector1)?;
        sheet.write_number(row, 2, record.sector2)?;
        sheet.write_number(row, 3, record.sector3)?;
    }

    // Forecast results
    let sheet = workbook.add_worksheet();
    sheet.set_name(FORECAST_SHEET)?;
    sheet.write_string(0, 0, "Field")?;
    sheet.write_string(0, 1, "Value")?;
    let mut row: u32 = 1;
    let write_pair = |sheet: &mut rust_xlsxwriter::Worksheet,
                          row: &mut u32,
                          label: &str,
                          value: String|
     -> Result<(), ForecastError> {
        sheet.write_string(*row, 0, label)?;
        sheet.write_string(*row, 1, value)?;
        *row += 1;
        Ok(())
    };
    write_pair(sheet, &mut row, "Project", snapshot.name.clone())?;
    write_pair(sheet, &mut row, "Location", snapshot.location.clone())?;
    write_pair(sheet, &mut row, "Created", snapshot.created_at.clone())?;
    write_pair(sheet, &mut row, "Planning type", snapshot.planning_type.to_string())?;
    write_pair(sheet, &mut row, "Urban class", snapshot.urban_class.to_string())?;
    write_pair(sheet, &mut row, "Total area (ha)", snapshot.total_area_ha.to_string())?;
    write_pair(sheet, &mut row, "Current density", snapshot.current_density.to_string())?;
    write_pair(
        sheet,
        &mut row,
        "Natural growth 5y (%)",
        snapshot.natural_growth_rate_5y.to_string(),
    )?;
    write_pair(
        sheet,
        &mut row,
        "Mechanical growth 5y (%)",
        snapshot.mechanical_growth_rate_5y.to_string(),
    )?;
    write_pair(sheet, &mut row, "Visitors (Nt)", snapshot.visitors_total.to_string())?;
    write_pair(
        sheet,
        &mut row,
        "Average stay (days)",
        snapshot.average_stay_days.to_string(),
    )?;
    write_pair(
        sheet,
        &mut row,
        "Converted visitors (N0)",
        snapshot.converted_short_term_population.to_string(),
    )?;
    write_pair(
        sheet,
        &mut row,
        "Converted population, current",
        snapshot.converted_population_current.to_string(),
    )?;
    write_pair(
        sheet,
        &mut row,
        "Converted population, 10-year",
        snapshot.converted_population_10y.to_string(),
    )?;
    write_pair(
        sheet,
        &mut row,
        "Converted population, 20-year",
        snapshot.converted_population_20y.to_string(),
    )?;
    write_pair(
        sheet,
        &mut row,
        "Converted population, 50-year",
        snapshot.converted_population_50y.to_string(),
    )?;

    // Subdivision listing with totals
    let sheet = workbook.add_worksheet();
    sheet.set_name(SUBDIVISION_SHEET)?;
    let headers = [
        "name",
        "area_ha",
        "current_population",
        "approved_project_population",
        "natural_growth_rate",
        "mechanical_growth_rate",
        "converted_population",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    let mut row: u32 = 1;
    for sub in &snapshot.subdivisions {
        sheet.write_string(row, 0, &sub.name)?;
        sheet.write_number(row, 1, sub.area_ha)?;
        sheet.write_number(row, 2, sub.current_population)?;
        sheet.write_number(row, 3, sub.approved_project_population)?;
        sheet.write_number(row, 4, sub.natural_growth_rate)?;
        sheet.write_number(row, 5, sub.mechanical_growth_rate)?;
        sheet.write_number(row, 6, sub.converted_population)?;
        row += 1;
    }
    let totals = aggregate_subdivisions(&snapshot.subdivisions);
    sheet.write_string(row, 0, "TOTAL")?;
    sheet.write_number(row, 1, totals.area_ha)?;
    sheet.write_number(row, 2, totals.current_population)?;
    sheet.write_number(row, 3, totals.approved_project_population)?;

    workbook.save(path.as_ref())?;

    Ok(())
}
