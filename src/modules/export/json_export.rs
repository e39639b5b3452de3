//! JSON Export
//!
//! Writes the whole dataset as one pretty-printed document.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ExportError;
use crate::domain::Dataset;

/// Write the dataset to a JSON file
pub fn write_dataset(path: &Path, data: &Dataset) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(data)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
