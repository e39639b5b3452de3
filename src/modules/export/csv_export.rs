//! CSV Export
//!
//! One file per table, header row first.

use std::path::Path;

use super::ExportError;
use crate::domain::{CargoEntry, RatingEntry, SpecEntry, Trim};

/// Write specification pairs to CSV file
pub fn write_specs(path: &Path, specs: &[SpecEntry]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["label", "value"])?;
    for spec in specs {
        wtr.write_record([spec.label, spec.value])?;
    }
    wtr.flush()?;
    Ok(specs.len())
}

/// Write trims to CSV file; features are joined with "; "
pub fn write_trims(path: &Path, trims: &[Trim]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["name", "price", "features"])?;
    for trim in trims {
        wtr.write_record([
            trim.name.to_string(),
            trim.price.to_string(),
            trim.features.join("; "),
        ])?;
    }
    wtr.flush()?;
    Ok(trims.len())
}

pub fn write_cargo(path: &Path, cargo: &[CargoEntry]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["configuration", "space"])?;
    for entry in cargo {
        wtr.write_record([entry.configuration.to_string(), entry.space.to_string()])?;
    }
    wtr.flush()?;
    Ok(cargo.len())
}

pub fn write_ratings(path: &Path, ratings: &[RatingEntry]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["feature", "value"])?;
    for rating in ratings {
        wtr.write_record([rating.feature.to_string(), rating.value.to_string()])?;
    }
    wtr.flush()?;
    Ok(ratings.len())
}
