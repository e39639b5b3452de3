//! Export Module
//!
//! Writes the static tables to disk.
//!
//! - 'e' key or `:export [dir]` in the TUI, `--export <dir>` on the CLI
//! - One CSV per table, plus a combined JSON document
//! - Each export lands in its own timestamped directory

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use directories::ProjectDirs;
use thiserror::Error;

use crate::domain::Dataset;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary of a finished export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub dir: PathBuf,
    pub files: usize,
}

/// Platform data directory used when nothing else is configured
pub fn default_export_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "telluride", "telluride").map(|dirs| dirs.data_dir().join("exports"))
}

/// Generate a timestamped directory name
fn generate_dirname(prefix: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}", prefix, timestamp)
}

/// Create a directory under `base` that did not exist before.
///
/// Exports started within the same second get a numeric suffix.
fn create_fresh_dir(base: &Path, name: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(base).map_err(|source| ExportError::CreateDir {
        path: base.to_path_buf(),
        source,
    })?;

    let mut attempt = 1u32;
    loop {
        let dir = if attempt == 1 {
            base.join(name)
        } else {
            base.join(format!("{name}-{attempt}"))
        };
        match fs::create_dir(&dir) {
            Ok(()) => return Ok(dir),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => attempt += 1,
            Err(source) => return Err(ExportError::CreateDir { path: dir, source }),
        }
    }
}

/// Export every table into a fresh subdirectory of `base`
pub fn export_all(base: &Path, data: &Dataset) -> Result<ExportReport, ExportError> {
    let dir = create_fresh_dir(base, &generate_dirname("telluride"))?;

    csv_export::write_specs(&dir.join("specs.csv"), data.specs)?;
    csv_export::write_trims(&dir.join("trims.csv"), data.trims)?;
    csv_export::write_cargo(&dir.join("cargo.csv"), data.cargo)?;
    csv_export::write_ratings(&dir.join("ratings.csv"), data.ratings)?;
    json_export::write_dataset(&dir.join("telluride.json"), data)?;

    Ok(ExportReport { dir, files: 5 })
}
