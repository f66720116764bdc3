//! # Row Ingestion
//!
//! Turns raw sheet rows into validated data rows.
//!
//! An input sheet has a header row, data rows, and optionally a `PROCEDURE`
//! marker in the first column followed by free-form key/value rows:
//!
//! ```text
//! Name       | SMILES            | Measured mass (g) | Measured volume (μL)
//! DCPD       | C1C=CC2C1C3CC2C=C3| 870.0             | -
//!            |                   |                   |            <- skipped
//! PROCEDURE  |                   |                   |
//! Degassed?  | YES               |                   |
//! ```
//!
//! Each data row is classified by [`classify::classify_row`]; blank rows are
//! dropped, malformed rows abort with [`IngestError::RowValidation`].

mod cell;
pub mod classify;
mod error;
mod row;
mod sheet;


pub use cell::CellValue;
pub use classify::{RowClass, RowDefect};
pub use error::IngestError;
pub use row::{CellMap, OrderedMap, ProcedureMap, Row};
pub use sheet::{InputSheet, RawSheet, SheetIngestor};
