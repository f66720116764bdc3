//! # Batch Assembly
//!
//! Builds the derived-metadata tree of one formulation batch.
//!
//! ## Pipeline
//!
//! 1. [`check_version`]: only workbooks tagged `3.0` are processed
//! 2. Ingestion: every input sheet goes through the row classifier
//! 3. [`BatchAssembler::validate_identifiers`]: every SMILES of every category
//!    must be known to the compound table before any sample is built
//! 4. [`BatchAssembler::build_batch`]: one [`Sample`](crate::chemistry::Sample)
//!    per kept row
//! 5. [`derive_records`]: per-category records, each fed the sibling lists
//!    its formulas need
//! 6. [`BatchAssembler::assemble`]: procedure sheets are merged in and pruned
//!    according to the `general` sheet
//!
//! Any failure aborts the batch; no partial tree is returned.
//!
//! ## Example
//!
//! ```no_run
//! use polycure::batch::{BatchAssembler, Workbook};
//! use polycure::chemistry::CompoundDatabase;
//! use polycure::report::ValidationReport;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db = CompoundDatabase::from_csv_file("compounds.csv")?;
//! let workbook = Workbook::default();
//! let mut assembler = BatchAssembler::new(&db, ValidationReport::new("batch"));
//! let experiment = assembler.assemble(&workbook)?;
//! println!("{}", serde_json::to_string_pretty(&experiment)?);
//! # Ok(())
//! # }
//! ```

mod assembler;
mod category;
mod envelope;
mod error;
mod experiment;
mod records;


pub use assembler::{derive_records, Batch, BatchAssembler, BatchInputs};
pub use category::Category;
pub use envelope::{ExtractionEnvelope, EXTRACTOR_NAME};
pub use error::BatchError;
pub use experiment::{check_version, Experiment, ProcedureSection, Workbook, WorkbookProperties};
pub use records::{
    AdditiveRecord, CatalystRecord, CategoryOutput, DerivedInputs, InhibitorRecord,
    InitiatorRecord, MeasuredMass, MeasuredVolume, MonomerRecord, SolventRecord,
};
