use thiserror::Error;

/// Errors that can occur when loading, saving, or converting forecast data.
///
/// The forecasting computations themselves are total and never fail; every
/// variant here belongs to the io/configuration boundary.
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<calamine::Error> for ForecastError {
    fn from(e: calamine::Error) -> Self {
        ForecastError::Excel(e.to_string())
    }
}

impl From<calamine::XlsxError> for ForecastError {
    fn from(e: calamine::XlsxError) -> Self {
        ForecastError::Excel(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ForecastError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ForecastError::Excel(e.to_string())
    }
}
