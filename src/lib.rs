//! # polycure - Formulation Batch Enrichment
//!
//! `polycure` turns the measured inputs of a polymer-curing formulation batch
//! into a tree of derived physicochemical quantities: moles, molar ratios,
//! mole and weight percentages, and initiator concentrations.
//!
//! ## Key Features
//!
//! - **Compound table**: SMILES-keyed densities and molecular weights, checked
//!   for duplicate keys at load and for completeness before any math runs.
//!
//! - **One sample model**: every compound instance is a [`chemistry::Sample`]
//!   tagged with a [`chemistry::Role`]; role formulas are free functions.
//!
//! - **Decision-table ingestion**: every combination of name, SMILES, mass and
//!   volume presence maps to keep, skip, or a named row defect.
//!
//! - **Fail-fast batches**: an unsupported workbook version, an unknown
//!   compound, or a malformed row aborts the batch with no partial output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use polycure::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db = CompoundDatabase::from_csv_file("compounds.csv")?;
//! let workbook = load_batch_dir(Path::new("batch-042"))?;
//!
//! let mut assembler = BatchAssembler::new(&db, ValidationReport::new("batch-042"));
//! let experiment = assembler.assemble(&workbook)?;
//!
//! let envelope = ExtractionEnvelope::new(experiment);
//! println!("{}", serde_json::to_string_pretty(&envelope)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`chemistry`]: compound table, samples, role formulas
//! - [`ingest`]: raw sheet rows to validated rows and procedure blocks
//! - [`batch`]: batch-wide validation and the derived-metadata tree
//! - [`report`]: injected sink receiving every validation check
//! - [`workbook`]: batch directories exported as CSV sheets
//! - [`schema`]: sheet titles, column names and constants
//!
//! ## Units
//!
//! | Quantity | Input | Internal |
//! |----------|-------|----------|
//! | mass | g or mg | g |
//! | volume | μL | mL |
//! | density | | g/mL |
//! | molecular weight | | g/mol |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod chemistry;
pub mod ingest;
pub mod report;
pub mod schema;
pub mod workbook;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::batch::{
        check_version, BatchAssembler, BatchError, BatchInputs, Category, DerivedInputs,
        Experiment, ExtractionEnvelope, Workbook, WorkbookProperties,
    };
    pub use crate::chemistry::{
        ChemistryError, CompoundDatabase, CompoundRecord, InitiatorRole, Role, Sample,
    };
    pub use crate::ingest::{CellValue, IngestError, RawSheet, Row, SheetIngestor};
    pub use crate::report::{LogSink, ReportSink, SheetTally, ValidationCheck, ValidationReport};
    pub use crate::workbook::{load_batch_dir, BatchManifest, WorkbookError};
}
