//! # Batch Directory Reader
//!
//! A workbook exported to disk is a directory holding a manifest and one CSV
//! file per sheet:
//!
//! ```text
//! batch-042/
//! ├── batch.toml          # version, batch_id, optional sheet order
//! ├── general.csv
//! ├── monomers.csv
//! ├── catalysts.csv
//! └── chemical initiation.csv
//! ```
//!
//! ```toml
//! version = "3.0"
//! batch_id = "B-042"
//! sheets = ["general", "monomers", "catalysts"]
//! ```
//!
//! Without a `sheets` list every `*.csv` file is read, ordered by name. Cells
//! are interpreted with [`CellValue::parse`].

mod error;

#[cfg(test)]
mod tests;

use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::batch::{Workbook, WorkbookProperties};
use crate::ingest::{CellValue, RawSheet};

pub use error::WorkbookError;

/// File name of the batch manifest
pub const MANIFEST_FILE: &str = "batch.toml";

/// Contents of `batch.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatchManifest {
    /// Workbook version tag
    pub version: Option<String>,
    /// Batch identifier
    pub batch_id: Option<String>,
    /// Sheet titles in workbook order
    pub sheets: Option<Vec<String>>,
}

impl BatchManifest {
    /// Parse a manifest from TOML text
    pub fn from_toml(content: &str) -> Result<Self, WorkbookError> {
        Ok(toml::from_str(content)?)
    }

    /// Read `batch.toml` from a batch directory
    pub fn from_dir(dir: &Path) -> Result<Self, WorkbookError> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|source| WorkbookError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

/// Read one exported sheet; rows may have different lengths
pub fn read_sheet<R: Read>(title: &str, reader: R) -> Result<RawSheet, WorkbookError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let rows = csv_reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(CellValue::parse).collect::<Vec<_>>())
                .map_err(|source| WorkbookError::Csv {
                    sheet: title.to_string(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawSheet::new(title, rows))
}

fn sheet_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{}.csv", title))
}

fn discover_sheets(dir: &Path) -> Result<Vec<String>, WorkbookError> {
    let entries = fs::read_dir(dir).map_err(|source| WorkbookError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut titles = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| WorkbookError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                titles.push(stem.to_string());
            }
        }
    }
    titles.sort();
    Ok(titles)
}

/// Load a whole batch directory into a [`Workbook`]
pub fn load_batch_dir(dir: &Path) -> Result<Workbook, WorkbookError> {
    let manifest = BatchManifest::from_dir(dir)?;
    let titles = match manifest.sheets {
        Some(titles) => titles,
        None => discover_sheets(dir)?,
    };

    let mut sheets = Vec::with_capacity(titles.len());
    for title in titles {
        let path = sheet_path(dir, &title);
        if !path.exists() {
            return Err(WorkbookError::MissingSheetFile { sheet: title, path });
        }
        let file = fs::File::open(&path).map_err(|source| WorkbookError::Io {
            path: path.clone(),
            source,
        })?;
        let sheet = read_sheet(&title, file)?;
        log::debug!("Read {} rows from {}", sheet.rows.len(), path.display());
        sheets.push(sheet);
    }

    log::info!("Loaded {} sheets from {}", sheets.len(), dir.display());

    Ok(Workbook {
        properties: WorkbookProperties {
            version: manifest.version,
            batch_id: manifest.batch_id,
        },
        sheets,
    })
}
