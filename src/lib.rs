pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use analysis::Forecaster;
pub use config::AppConfig;
pub use error::ForecastError;
pub use io::{SnapshotReader, SnapshotWriter};
pub use models::{ForecastSnapshot, PlanningType, Subdivision, UrbanClass};
