//! # Formulation Workbook Schema
//!
//! Names of the sheets, columns and markers that make up a formulation batch
//! workbook, plus the single workbook version this crate understands.
//!
//! ## Input Sheet Columns
//!
//! | Column | Unit | Description |
//! |--------|------|-------------|
//! | SMILES | - | Structural key into the compound table |
//! | Name | - | Display name entered by the operator |
//! | Measured mass (g) | g | Preferred mass column |
//! | Measured mass (mg) | mg | Used when no gram column exists |
//! | Measured volume (μL) | μL | Converted to mL before any computation |
//!
//! Rows below a first-column `PROCEDURE` marker are free-form key/value pairs.

/// Input sheet and compound table column names.
pub mod columns;
mod constants;
/// Sheet titles of a formulation workbook.
pub mod sheets;

pub use constants::*;
