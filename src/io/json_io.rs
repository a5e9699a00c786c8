use std::path::Path;

use crate::analysis::recompute_derived;
use crate::error::ForecastError;
use crate::models::ForecastSnapshot;

/// Read a forecast snapshot from a JSON file.
///
/// Derived fields are recomputed on load so a file edited out-of-band still
/// satisfies the derived-field invariant. Advisory validation findings are
/// logged, never fatal.
pub fn read_json(path: impl AsRef<Path>) -> Result<ForecastSnapshot, ForecastError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let mut snapshot: ForecastSnapshot = serde_json::from_str(&content)?;
    recompute_derived(&mut snapshot);
    for issue in snapshot.validation_issues() {
        tracing::warn!(row = issue.row_index, field = %issue.field, "{}", issue.message);
    }
    Ok(snapshot)
}

/// Read a forecast snapshot from JSON bytes.
pub fn read_json_from_bytes(data: &[u8], name: &str) -> Result<ForecastSnapshot, ForecastError> {
    let content = std::str::from_utf8(data)
        .map_err(|e| ForecastError::ParseError(format!("Invalid UTF-8: {e}")))?;
    let mut snapshot: ForecastSnapshot = serde_json::from_str(content)?;
    recompute_derived(&mut snapshot);
    snapshot.name = name.to_string();
    Ok(snapshot)
}

/// Write a forecast snapshot to a JSON file.
pub fn write_json(
    snapshot: &ForecastSnapshot,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ForecastError> {
    let content = if pretty {
        serde_json::to_string_pretty(snapshot)?
    } else {
        serde_json::to_string(snapshot)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}
