use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use urban_forecaster::{
    analysis::{apply_edit, Edit, PopulationField, SubdivisionField},
    io::write_json,
    models::ForecastSnapshot,
};

fn sample_snapshot() -> ForecastSnapshot {
    let mut snapshot = ForecastSnapshot::new("CLI Test", 2020);
    snapshot = apply_edit(&snapshot, Edit::SetLocation("Test Province".to_string()));
    snapshot = apply_edit(&snapshot, Edit::SetTotalArea(2_000.0));
    for row in 0..5 {
        snapshot = apply_edit(
            &snapshot,
            Edit::SetPopulationField {
                row,
                field: PopulationField::TotalPopulation,
                value: 60_000.0 + row as f64 * 1_000.0,
            },
        );
        snapshot = apply_edit(
            &snapshot,
            Edit::SetPopulationField {
                row,
                field: PopulationField::UrbanPopulation,
                value: 24_000.0 + row as f64 * 400.0,
            },
        );
        snapshot = apply_edit(
            &snapshot,
            Edit::SetPopulationField {
                row,
                field: PopulationField::NaturalGrowthRate,
                value: 1.1,
            },
        );
    }
    snapshot = apply_edit(&snapshot, Edit::SetVisitorsTotal(10_000.0));
    snapshot = apply_edit(&snapshot, Edit::SetAverageStayDays(2.0));
    snapshot = apply_edit(
        &snapshot,
        Edit::AddSubdivision {
            id: "s1".to_string(),
            name: "Harbor".to_string(),
        },
    );
    apply_edit(
        &snapshot,
        Edit::SetSubdivisionField {
            id: "s1".to_string(),
            field: SubdivisionField::AreaHa,
            value: 15.0,
        },
    )
}

/// Write a test snapshot to a JSON file in the given directory.
fn create_test_json(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("test_snapshot.json");
    write_json(&sample_snapshot(), &path, true).unwrap();
    path
}

fn cmd() -> Command {
    Command::cargo_bin("urban-forecaster").unwrap()
}

// --- Init subcommand ---

#[test]
fn test_init_creates_snapshot() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("fresh.json");

    cmd()
        .args([
            "init",
            "--name",
            "New Town 2045",
            "--first-year",
            "2021",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created snapshot"));

    let snapshot = urban_forecaster::io::read_json(&out_path).unwrap();
    assert_eq!(snapshot.name, "New Town 2045");
    assert_eq!(snapshot.historical_population.len(), 5);
    assert_eq!(snapshot.historical_population[0].year, 2021);
}

#[test]
fn test_init_applies_config_defaults() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("fresh.json");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "default_average_stay_days = 3.5\ndefault_growth_threshold = 0.8\n",
    )
    .unwrap();

    cmd()
        .args([
            "init",
            "--name",
            "Configured",
            "--first-year",
            "2020",
            "--output",
            out_path.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let snapshot = urban_forecaster::io::read_json(&out_path).unwrap();
    assert_eq!(snapshot.average_stay_days, 3.5);
    assert_eq!(snapshot.growth_threshold, 0.8);
}

// --- Forecast subcommand ---

#[test]
fn test_forecast_success() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);

    cmd()
        .args(["forecast", "--input", json_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forecast Summary"))
        .stdout(predicate::str::contains("Population History"))
        .stdout(predicate::str::contains("Subdivisions"))
        .stdout(predicate::str::contains("Harbor"));
}

#[test]
fn test_forecast_writes_output() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);
    let out_path = dir.path().join("out.json");

    cmd()
        .args([
            "forecast",
            "--input",
            json_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let updated = urban_forecaster::io::read_json(&out_path).unwrap();
    assert!(updated.converted_population_10y > 0.0);
}

#[test]
fn test_forecast_land_use_detail() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);

    cmd()
        .args([
            "forecast",
            "--input",
            json_path.to_str().unwrap(),
            "--land-use",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Land Use: Harbor"));
}

#[test]
fn test_forecast_with_config() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "organization = \"Test Planning Office\"\n").unwrap();

    cmd()
        .args([
            "forecast",
            "--input",
            json_path.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Planning Office"));
}

#[test]
fn test_forecast_missing_input() {
    cmd()
        .args(["forecast", "--input", "/nonexistent/snapshot.json"])
        .assert()
        .failure();
}

#[test]
fn test_forecast_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "not a snapshot").unwrap();

    cmd()
        .args(["forecast", "--input", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

// --- Summary subcommand ---

#[test]
fn test_summary_success() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);

    cmd()
        .args(["summary", "--input", json_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Summary"))
        .stdout(predicate::str::contains("CLI Test"))
        .stdout(predicate::str::contains("Test Province"))
        .stdout(predicate::str::contains("Subdivisions:     1"));
}

// --- Convert subcommand ---

#[test]
fn test_convert_json_to_csv() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);
    let csv_path = dir.path().join("history.csv");

    cmd()
        .args([
            "convert",
            "--input",
            json_path.to_str().unwrap(),
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));

    let loaded = urban_forecaster::io::read_csv(&csv_path).unwrap();
    assert_eq!(loaded.historical_population.len(), 5);
}

#[test]
fn test_convert_json_to_xlsx_and_back() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);
    let xlsx_path = dir.path().join("snapshot.xlsx");
    let back_path = dir.path().join("back.json");

    cmd()
        .args([
            "convert",
            "--input",
            json_path.to_str().unwrap(),
            "--output",
            xlsx_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    cmd()
        .args([
            "convert",
            "--input",
            xlsx_path.to_str().unwrap(),
            "--output",
            back_path.to_str().unwrap(),
            "--pretty",
        ])
        .assert()
        .success();

    let original = sample_snapshot();
    let restored = urban_forecaster::io::read_json(&back_path).unwrap();
    assert_eq!(
        restored.historical_population,
        original.historical_population
    );
}

#[test]
fn test_convert_unsupported_output() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);
    let out_path = dir.path().join("data.parquet");

    cmd()
        .args([
            "convert",
            "--input",
            json_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output format"));
}

// --- Report subcommand ---

#[test]
fn test_report_csv() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);
    let report_path = dir.path().join("report.csv");

    cmd()
        .args([
            "report",
            "--input",
            json_path.to_str().unwrap(),
            "--output",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("report written"));

    let content = std::fs::read_to_string(&report_path).unwrap();
    assert!(content.contains("POPULATION FORECAST"));
    assert!(content.contains("Harbor"));
}

#[test]
fn test_report_xlsx() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);
    let report_path = dir.path().join("report.xlsx");

    cmd()
        .args([
            "report",
            "--input",
            json_path.to_str().unwrap(),
            "--output",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(report_path.exists());
}

#[test]
fn test_report_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let json_path = create_test_json(&dir);
    let report_path = dir.path().join("report.pdf");

    cmd()
        .args([
            "report",
            "--input",
            json_path.to_str().unwrap(),
            "--output",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported report format"));
}

// --- Help / version ---

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Urban Development Forecaster"));
}

#[test]
fn test_version() {
    cmd().arg("--version").assert().success();
}
