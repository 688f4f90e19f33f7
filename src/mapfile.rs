use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::InputError;
use crate::types::MappingRow;

pub const FAMILY_MODEL_COLUMN: &str = "Family-model";

// GenuineIntel-6-2E -> 0x2E
// GenuineIntel-6-55-[01234] -> 0x55
static MODEL_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w*)-(\d)-([\da-zA-Z]{2})(.*)").expect("static regex must compile"));

/// Extracts the `0xHH` model ID from a `Family-model` key.
///
/// Values that do not look like `<vendor>-<family>-<model>` are returned
/// unchanged; they never compare equal to a kernel model ID.
pub fn derive_model_id(family_model: &str) -> String {
    match MODEL_ID_RE.captures(family_model) {
        Some(caps) => format!("0x{}", &caps[3]),
        None => family_model.to_string(),
    }
}

/// Loads `mapfile.csv`. Empty cells are read as empty strings.
///
/// # Errors
/// Returns an error if the file is missing, unreadable, not valid CSV, or has
/// no `Family-model` column.
pub fn load_mapfile(path: &Path) -> Result<Vec<MappingRow>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInputFile {
            path: path.to_path_buf(),
        });
    }

    info!("Loading {}.", path.display());
    let csv_err = |source: csv::Error| InputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let key_idx = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .position(|h| h == FAMILY_MODEL_COLUMN)
        .ok_or_else(|| InputError::MissingColumn {
            path: path.to_path_buf(),
            column: FAMILY_MODEL_COLUMN,
        })?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        // short rows leave trailing cells absent
        let family_model = record.map_err(csv_err)?.get(key_idx).unwrap_or("").to_string();
        let model_id = derive_model_id(&family_model);
        rows.push(MappingRow {
            family_model,
            model_id,
        });
    }
    Ok(rows)
}
