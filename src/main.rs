use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use urban_forecaster::{
    analysis::run_forecast,
    config::AppConfig,
    io,
    visualization::{
        print_forecast_summary, print_history_table, print_labor_table, print_land_use_detail,
        print_subdivision_table,
    },
};

#[derive(Parser)]
#[command(
    name = "urban-forecaster",
    about = "Urban Development Forecaster - Demographic and land-use projection tool",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a fresh snapshot with empty 5-year history tables
    Init {
        /// Project name
        #[arg(short, long)]
        name: String,

        /// First year of the 5-year history window
        #[arg(short, long)]
        first_year: i32,

        /// Location of the planning area
        #[arg(short, long, default_value = "")]
        location: String,

        /// Output JSON file path
        #[arg(short, long)]
        output: PathBuf,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run the forecast and display the full report
    Forecast {
        /// Path to input file (CSV, JSON, or Excel)
        #[arg(short, long)]
        input: PathBuf,

        /// Write the updated snapshot back to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Show the per-subdivision land-use indicator detail
        #[arg(long)]
        land_use: bool,
    },

    /// Display a quick summary of a snapshot
    Summary {
        /// Path to input file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Convert snapshot data between formats
    Convert {
        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Run the forecast and export the report (CSV or Excel)
    Report {
        /// Path to input file (CSV, JSON, or Excel)
        #[arg(short, long)]
        input: PathBuf,

        /// Report file path (.csv or .xlsx)
        #[arg(short, long)]
        output: PathBuf,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_snapshot(path: &PathBuf) -> Result<urban_forecaster::models::ForecastSnapshot> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => Ok(io::read_csv(path)?),
        "json" => Ok(io::read_json(path)?),
        "xlsx" | "xls" => Ok(io::read_excel(path)?),
        _ => anyhow::bail!("Unsupported file format: .{ext}. Use .csv, .json, or .xlsx"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            name,
            first_year,
            location,
            output,
            config,
        } => {
            let config = AppConfig::load_or_default(config.as_deref())?;
            let mut snapshot = urban_forecaster::models::ForecastSnapshot::new(name, first_year);
            snapshot.location = location;
            snapshot.average_stay_days = config.default_average_stay_days;
            snapshot.growth_threshold = config.default_growth_threshold;
            io::write_json(&snapshot, &output, true)?;
            println!(
                "{} Created snapshot {}",
                "Success:".green().bold(),
                output.display()
            );
        }

        Commands::Forecast {
            input,
            output,
            config,
            pretty,
            land_use,
        } => {
            let config = AppConfig::load_or_default(config.as_deref())?;

            println!(
                "\n{}",
                format!("Urban Development Forecast: {}", input.display())
                    .bold()
                    .cyan()
            );
            println!("  {}", config.organization);

            let snapshot = load_snapshot(&input)?;
            let snapshot = run_forecast(&snapshot);
            println!(
                "  Loaded {} history years and {} subdivisions",
                snapshot.historical_population.len(),
                snapshot.num_subdivisions()
            );

            print_forecast_summary(&snapshot);
            print_history_table(&snapshot);
            print_labor_table(&snapshot);
            print_subdivision_table(&snapshot);

            if land_use {
                for sub in &snapshot.subdivisions {
                    print_land_use_detail(sub);
                }
            }

            if let Some(output) = output {
                io::write_json(&snapshot, &output, pretty)?;
                println!(
                    "\n{} Wrote updated snapshot to {}",
                    "Success:".green().bold(),
                    output.display()
                );
            }
        }

        Commands::Summary { input } => {
            let snapshot = load_snapshot(&input)?;

            println!("\n{}", "Quick Summary".bold().cyan());
            println!("{}", "=".repeat(40));
            println!("  Name:             {}", snapshot.name);
            println!("  Location:         {}", snapshot.location);
            println!("  Planning type:    {}", snapshot.planning_type);
            println!("  Urban class:      {}", snapshot.urban_class);
            println!("  Total area:       {:.1} ha", snapshot.total_area_ha);
            println!(
                "  Current density:  {:.2} persons/ha",
                snapshot.current_density
            );
            println!(
                "  Latest total pop: {:.0}",
                snapshot.latest_total_population()
            );
            println!(
                "  Growth rates:     {:.2}% natural, {:.2}% mechanical",
                snapshot.natural_growth_rate_5y, snapshot.mechanical_growth_rate_5y
            );
            println!("  Subdivisions:     {}", snapshot.num_subdivisions());
        }

        Commands::Convert {
            input,
            output,
            pretty,
        } => {
            let snapshot = load_snapshot(&input)?;

            let out_ext = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();

            match out_ext.as_str() {
                "csv" => io::write_csv(&snapshot, &output)?,
                "json" => io::write_json(&snapshot, &output, pretty)?,
                "xlsx" => io::write_excel(&snapshot, &output)?,
                _ => anyhow::bail!("Unsupported output format: .{out_ext}"),
            }

            println!(
                "{} Converted {} -> {}",
                "Success:".green().bold(),
                input.display(),
                output.display()
            );
        }

        Commands::Report {
            input,
            output,
            config,
        } => {
            let config = AppConfig::load_or_default(config.as_deref())?;
            let snapshot = load_snapshot(&input)?;
            let snapshot = run_forecast(&snapshot);

            let out_ext = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();

            match out_ext.as_str() {
                "csv" => io::write_report_csv(&snapshot, &output)?,
                "xlsx" => io::write_excel(&snapshot, &output)?,
                _ => anyhow::bail!("Unsupported report format: .{out_ext}. Use .csv or .xlsx"),
            }

            println!(
                "{} {} report written to {}",
                "Success:".green().bold(),
                config.organization,
                output.display()
            );
        }
    }

    Ok(())
}
