use crate::chemistry::ChemistryError;
use crate::ingest::IngestError;

/// Errors that abort a batch; no partial output is produced
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Workbook version other than the supported one
    #[error("This extractor is not compatible with spreadsheet version {found}")]
    UnsupportedVersion {
        /// Version tag found on the workbook
        found: String,
    },

    /// Workbook carries no version tag
    #[error("Spreadsheet version is missing")]
    MissingVersion,

    /// Required sheet absent from the workbook
    #[error("Missing required sheet: {0}")]
    MissingSheet(String),

    /// Solvent concentration needs at least one catalyst
    #[error("Solvent concentration requires at least one catalyst")]
    MissingCatalyst,

    /// Compound table or formula error
    #[error("Chemistry error: {0}")]
    Chemistry(#[from] ChemistryError),

    /// Sample could not be built from a validated row
    #[error("On {sheet} tab: {smiles}: {source}")]
    Sample {
        /// Sheet the row came from
        sheet: String,
        /// SMILES of the row
        smiles: String,
        /// Underlying error
        source: ChemistryError,
    },

    /// Malformed input row
    #[error(transparent)]
    Ingest(#[from] IngestError),
}
