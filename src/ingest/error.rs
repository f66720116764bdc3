use super::{Row, RowDefect};

/// Errors raised while ingesting input sheets
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Malformed data row
    #[error("On {sheet} tab: {defect} in {row}")]
    RowValidation {
        /// Title of the sheet holding the row
        sheet: String,
        /// What is wrong with the row
        defect: RowDefect,
        /// The raw row
        row: Row,
    },
}
