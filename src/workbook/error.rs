use std::path::PathBuf;

/// Errors raised while reading a batch directory
#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    /// I/O error reading a batch file
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// CSV parsing error in an exported sheet
    #[error("CSV parsing error in {sheet}: {source}")]
    Csv {
        /// Sheet title
        sheet: String,
        /// Underlying error
        source: csv::Error,
    },

    /// Malformed `batch.toml`
    #[error("Failed to parse batch manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    /// Sheet listed in the manifest without a CSV file
    #[error("Sheet {sheet} listed in the manifest but {path} does not exist")]
    MissingSheetFile {
        /// Sheet title
        sheet: String,
        /// Expected CSV path
        path: PathBuf,
    },
}
