//! # Chemistry Module
//!
//! The compound reference table and the derived physicochemical quantities of
//! a formulation batch.
//!
//! ## Model
//!
//! Every compound instance is a [`Sample`] tagged with a [`Role`]. There is no
//! type per role: the formulas in [`formulas`] are free functions that take
//! the sample they describe and the sibling lists they need.
//!
//! ## Units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | mass | g |
//! | volume | mL |
//! | density | g/mL |
//! | molecular weight | g/mol |
//!
//! A sample measured by volume whose compound has no density resolves to a
//! mass of exactly 0.0.

mod database;
mod error;
pub mod formulas;
mod initiator;
mod sample;
pub mod units;

#[cfg(test)]
mod tests;

pub use database::{CompoundDatabase, CompoundRecord};
pub use error::ChemistryError;
pub use initiator::{InitiatorConcentration, InitiatorSummary};
pub use sample::{mass_from_volume, InitiatorRole, Role, Sample};
