use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::analysis::aggregate_subdivisions;
use crate::models::{ControlId, ForecastSnapshot, IndicatorId, Stage, Subdivision};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format the forecast summary table as a string.
pub fn format_forecast_summary(snapshot: &ForecastSnapshot) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Forecast Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec!["Metric", "Value", "Unit"]);

    table.add_row(vec![
        Cell::new("Planning type"),
        Cell::new(snapshot.planning_type.to_string()),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Urban class"),
        Cell::new(snapshot.urban_class.to_string()),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Total area"),
        Cell::new(format!("{:.1}", snapshot.total_area_ha)),
        Cell::new("ha"),
    ]);
    table.add_row(vec![
        Cell::new("Current density"),
        Cell::new(format!("{:.2}", snapshot.current_density)),
        Cell::new("persons/ha"),
    ]);
    table.add_row(vec![
        Cell::new("Growth threshold (Dn)"),
        Cell::new(format!("{:.2}", snapshot.growth_threshold)),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Natural growth, 5-year avg"),
        Cell::new(format!("{:.2}", snapshot.natural_growth_rate_5y)),
        Cell::new("%"),
    ]);
    table.add_row(vec![
        Cell::new("Mechanical growth, 5-year avg"),
        Cell::new(format!("{:.2}", snapshot.mechanical_growth_rate_5y)),
        Cell::new("%"),
    ]);
    table.add_row(vec![
        Cell::new("Combined growth rate"),
        Cell::new(format!("{:.2}", snapshot.combined_growth_rate())),
        Cell::new("%"),
    ]);
    table.add_row(vec![
        Cell::new("Visitors (Nt)"),
        Cell::new(format!("{:.0}", snapshot.visitors_total)),
        Cell::new("persons"),
    ]);
    table.add_row(vec![
        Cell::new("Average stay (m)"),
        Cell::new(format!("{:.1}", snapshot.average_stay_days)),
        Cell::new("days"),
    ]);
    table.add_row(vec![
        Cell::new("Converted visitors (N0)"),
        Cell::new(format!("{:.0}", snapshot.converted_short_term_population)),
        Cell::new("persons"),
    ]);
    table.add_row(vec![
        Cell::new("Converted population, current"),
        Cell::new(format!("{:.0}", snapshot.converted_population_current)),
        Cell::new("persons"),
    ]);
    table.add_row(vec![
        Cell::new("Converted population, 10-year"),
        Cell::new(format!("{:.0}", snapshot.converted_population_10y)),
        Cell::new("persons"),
    ]);
    table.add_row(vec![
        Cell::new("Converted population, 20-year"),
        Cell::new(format!("{:.0}", snapshot.converted_population_20y)),
        Cell::new("persons"),
    ]);
    table.add_row(vec![
        Cell::new("Converted population, 50-year"),
        Cell::new(format!("{:.0}", snapshot.converted_population_50y)),
        Cell::new("persons"),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print the forecast summary table.
pub fn print_forecast_summary(snapshot: &ForecastSnapshot) {
    print!("{}", format_forecast_summary(snapshot));
}

/// Format the 5-year population history table as a string.
pub fn format_history_table(snapshot: &ForecastSnapshot) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Population History".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec![
        "Year",
        "Total",
        "Urban",
        "Urbanization %",
        "Natural %",
        "Mechanical %",
    ]);

    for record in &snapshot.historical_population {
        table.add_row(vec![
            Cell::new(record.year),
            Cell::new(format!("{:.0}", record.total_population)),
            Cell::new(format!("{:.0}", record.urban_population)),
            Cell::new(format!("{:.2}", record.urbanization_rate)),
            Cell::new(format!("{:.2}", record.natural_growth_rate)),
            Cell::new(format!("{:.2}", record.mechanical_growth_rate)),
        ]);
    }
    table.add_row(vec![
        Cell::new("5-year average"),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{:.2}", snapshot.natural_growth_rate_5y)),
        Cell::new(format!("{:.2}", snapshot.mechanical_growth_rate_5y)),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print the population history table.
pub fn print_history_table(snapshot: &ForecastSnapshot) {
    print!("{}", format_history_table(snapshot));
}

/// Format the labor history and projected structure as a string.
pub fn format_labor_table(snapshot: &ForecastSnapshot) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Labor Structure".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec!["Year", "Sector 1", "Sector 2", "Sector 3"]);
    for record in &snapshot.historical_labor {
        table.add_row(vec![
            Cell::new(record.year),
            Cell::new(format!("{:.0}", record.sector1)),
            Cell::new(format!("{:.0}", record.sector2)),
            Cell::new(format!("{:.0}", record.sector3)),
        ]);
    }
    if let Some(latest) = snapshot.historical_labor.last() {
        let (s1, s2, s3) = latest.sector_shares();
        table.add_row(vec![
            Cell::new("Latest share %"),
            Cell::new(format!("{:.1}", s1)),
            Cell::new(format!("{:.1}", s2)),
            Cell::new(format!("{:.1}", s3)),
        ]);
    }
    output.push_str(&format!("{table}\n"));

    let mut projected = base_table();
    projected.set_header(vec![
        "Projected structure",
        "Sector 1 %",
        "Sector 2 %",
        "Sector 3 %",
    ]);
    projected.add_row(vec![
        Cell::new("10-year"),
        Cell::new(format!("{:.1}", snapshot.labor_projected_10y.sector1)),
        Cell::new(format!("{:.1}", snapshot.labor_projected_10y.sector2)),
        Cell::new(format!("{:.1}", snapshot.labor_projected_10y.sector3)),
    ]);
    projected.add_row(vec![
        Cell::new("20-year"),
        Cell::new(format!("{:.1}", snapshot.labor_projected_20y.sector1)),
        Cell::new(format!("{:.1}", snapshot.labor_projected_20y.sector2)),
        Cell::new(format!("{:.1}", snapshot.labor_projected_20y.sector3)),
    ]);
    output.push_str(&format!("{projected}"));
    output
}

/// Print the labor table.
pub fn print_labor_table(snapshot: &ForecastSnapshot) {
    print!("{}", format_labor_table(snapshot));
}

/// Format the subdivision listing with totals footer as a string.
///
/// Land-use indicators are shown per subdivision; only area and the two
/// population columns are totalled.
pub fn format_subdivision_table(snapshot: &ForecastSnapshot) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Subdivisions".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    if snapshot.subdivisions.is_empty() {
        output.push_str("  No subdivisions defined.\n");
        return output;
    }

    let mut table = base_table();
    table.set_header(vec![
        "Name",
        "Area (ha)",
        "Current pop",
        "Approved pop",
        "Residential (now)",
        "Residential (20y)",
        "Traffic (20y)",
    ]);

    for sub in &snapshot.subdivisions {
        table.add_row(vec![
            Cell::new(&sub.name),
            Cell::new(format!("{:.1}", sub.area_ha)),
            Cell::new(format!("{:.0}", sub.current_population)),
            Cell::new(format!("{:.0}", sub.approved_project_population)),
            Cell::new(format!(
                "{:.1}",
                sub.land_use(Stage::Current).indicator(IndicatorId::ResidentialUnit)
            )),
            Cell::new(format!(
                "{:.1}",
                sub.land_use(Stage::TwentyYear).indicator(IndicatorId::ResidentialUnit)
            )),
            Cell::new(format!(
                "{:.1}",
                sub.land_use(Stage::TwentyYear).indicator(IndicatorId::Traffic)
            )),
        ]);
    }

    let totals = aggregate_subdivisions(&snapshot.subdivisions);
    table.add_row(vec![
        Cell::new("TOTAL"),
        Cell::new(format!("{:.1}", totals.area_ha)),
        Cell::new(format!("{:.0}", totals.current_population)),
        Cell::new(format!("{:.0}", totals.approved_project_population)),
        Cell::new("-"),
        Cell::new("-"),
        Cell::new("-"),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print the subdivision table.
pub fn print_subdivision_table(snapshot: &ForecastSnapshot) {
    print!("{}", format_subdivision_table(snapshot));
}

/// Format the full land-use indicator detail of one subdivision as a string.
pub fn format_land_use_detail(subdivision: &Subdivision) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("Land Use: {}", subdivision.name).bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec!["Indicator", "Current", "10-year", "20-year", "50-year"]);

    for id in IndicatorId::ALL {
        table.add_row(vec![
            Cell::new(id.label()),
            Cell::new(format!("{:.1}", subdivision.land_use(Stage::Current).indicator(id))),
            Cell::new(format!("{:.1}", subdivision.land_use(Stage::TenYear).indicator(id))),
            Cell::new(format!("{:.1}", subdivision.land_use(Stage::TwentyYear).indicator(id))),
            Cell::new(format!("{:.1}", subdivision.land_use(Stage::FiftyYear).indicator(id))),
        ]);
    }

    // Architectural controls are present only for non-general planning types
    if subdivision.land_use(Stage::Current).controls().is_some() {
        for id in ControlId::ALL {
            let cell = |stage: Stage| -> Cell {
                match subdivision.land_use(stage).control(id) {
                    Some(value) => Cell::new(format!("{:.1}", value)),
                    None => Cell::new("-"),
                }
            };
            table.add_row(vec![
                Cell::new(id.label()),
                cell(Stage::Current),
                cell(Stage::TenYear),
                cell(Stage::TwentyYear),
                cell(Stage::FiftyYear),
            ]);
        }
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the land-use detail of one subdivision.
pub fn print_land_use_detail(subdivision: &Subdivision) {
    print!("{}", format_land_use_detail(subdivision));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{apply_edit, run_forecast, Edit, PopulationField, SubdivisionField};
    use crate::models::PlanningType;

    fn sample_snapshot() -> ForecastSnapshot {
        let mut snapshot = ForecastSnapshot::new("Table Test", 2020);
        snapshot = apply_edit(
            &snapshot,
            Edit::SetPopulationField {
                row: 4,
                field: PopulationField::TotalPopulation,
                value: 100_000.0,
            },
        );
        snapshot = apply_edit(
            &snapshot,
            Edit::AddSubdivision {
                id: "s1".to_string(),
                name: "Harbor".to_string(),
            },
        );
        snapshot = apply_edit(
            &snapshot,
            Edit::SetSubdivisionField {
                id: "s1".to_string(),
                field: SubdivisionField::AreaHa,
                value: 31.5,
            },
        );
        run_forecast(&snapshot)
    }

    #[test]
    fn test_forecast_summary_contains_metrics() {
        let output = format_forecast_summary(&sample_snapshot());
        assert!(output.contains("Forecast Summary"));
        assert!(output.contains("Converted population, 20-year"));
        assert!(output.contains("Combined growth rate"));
        assert!(output.contains("100000"));
    }

    #[test]
    fn test_history_table_has_average_footer() {
        let output = format_history_table(&sample_snapshot());
        assert!(output.contains("Population History"));
        assert!(output.contains("5-year average"));
        assert!(output.contains("2024"));
    }

    #[test]
    fn test_labor_table_has_projection_rows() {
        let output = format_labor_table(&sample_snapshot());
        assert!(output.contains("Labor Structure"));
        assert!(output.contains("10-year"));
        assert!(output.contains("20-year"));
    }

    #[test]
    fn test_subdivision_table_lists_and_totals() {
        let output = format_subdivision_table(&sample_snapshot());
        assert!(output.contains("Harbor"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("31.5"));
    }

    #[test]
    fn test_subdivision_table_empty() {
        let snapshot = ForecastSnapshot::new("Empty", 2020);
        let output = format_subdivision_table(&snapshot);
        assert!(output.contains("No subdivisions defined."));
    }

    #[test]
    fn test_land_use_detail_general_hides_controls() {
        let snapshot = sample_snapshot();
        let sub = snapshot.subdivision("s1").unwrap();
        let output = format_land_use_detail(sub);
        assert!(output.contains("Residential unit land"));
        assert!(!output.contains("Max building density"));
    }

    #[test]
    fn test_land_use_detail_zoning_shows_controls() {
        let snapshot = apply_edit(
            &sample_snapshot(),
            Edit::SetPlanningType(PlanningType::Zoning),
        );
        let sub = snapshot.subdivision("s1").unwrap();
        let output = format_land_use_detail(sub);
        assert!(output.contains("Max building density"));
        assert!(output.contains("Max height"));
    }
}
