//! Data-row classification.
//!
//! Every data row is reduced to the columns its sheet has ([`RowLayout`]) and
//! which recognised fields are filled in ([`Presence`]). [`classify`] maps that
//! pair to keep/skip/reject through a single decision table.

use std::fmt;

use crate::schema::columns;

use super::Row;

/// Quantity columns available on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityColumns {
    /// Both a mass and a volume column
    MassAndVolume,
    /// Only a mass column
    MassOnly,
    /// Only a volume column
    VolumeOnly,
    /// Neither
    None,
}

/// Recognised columns of a row's sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Whether the sheet has a SMILES column at all
    pub identifier_column: bool,
    /// Mass/volume columns of the sheet
    pub quantities: QuantityColumns,
}

/// Which recognised fields of a row carry a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presence {
    /// Name is filled in
    pub name: bool,
    /// SMILES is filled in
    pub identifier: bool,
    /// A mass was measured
    pub mass: bool,
    /// A volume was measured
    pub volume: bool,
}

/// Why a data row is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDefect {
    /// Named row with both a mass and a volume
    ConflictingQuantities,
    /// Named row with neither a mass nor a volume
    MissingQuantity,
    /// Only one of name and SMILES given
    MissingNameOrIdentifier,
}

impl fmt::Display for RowDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowDefect::ConflictingQuantities => "Only specify one of mass or volume",
            RowDefect::MissingQuantity => "Volume or mass must be specified",
            RowDefect::MissingNameOrIdentifier => "Missing Name or SMILES",
        })
    }
}

/// Why a data row is dropped without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The sheet has no SMILES column; its data section does not apply
    NotApplicable,
    /// Placeholder row with every recognised field blank
    Blank,
}

/// Outcome of classifying one data row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    /// Valid data row
    Keep,
    /// Dropped silently
    Skip(SkipReason),
    /// Malformed row; aborts the batch
    Reject(RowDefect),
}

/// The decision table: layout × presence → keep/skip/reject
pub fn classify(layout: RowLayout, presence: Presence) -> RowClass {
    use QuantityColumns as Q;

    if !layout.identifier_column {
        return RowClass::Skip(SkipReason::NotApplicable);
    }

    let named = presence.name && presence.identifier;
    let unnamed = !presence.name && !presence.identifier;

    match (named, unnamed, presence.mass, presence.volume, layout.quantities) {
        (true, _, true, true, _) => RowClass::Reject(RowDefect::ConflictingQuantities),
        (true, _, false, false, _) => RowClass::Reject(RowDefect::MissingQuantity),
        (true, _, _, _, _) => RowClass::Keep,
        (_, true, false, false, Q::MassAndVolume) => RowClass::Skip(SkipReason::Blank),
        (_, true, false, _, Q::MassOnly) => RowClass::Skip(SkipReason::Blank),
        (_, true, _, false, Q::VolumeOnly) => RowClass::Skip(SkipReason::Blank),
        _ => RowClass::Reject(RowDefect::MissingNameOrIdentifier),
    }
}

/// Mass column of a row, grams preferred over milligrams
pub fn mass_column(row: &Row) -> Option<&'static str> {
    [columns::MEASURED_MASS_G, columns::MEASURED_MASS_MG]
        .into_iter()
        .find(|c| row.contains_key(c))
}

/// Volume column of a row, either spelling of the micro prefix
pub fn volume_column(row: &Row) -> Option<&'static str> {
    [columns::MEASURED_VOLUME_UL, columns::MEASURED_VOLUME_UL_MICRO_SIGN]
        .into_iter()
        .find(|c| row.contains_key(c))
}

impl RowLayout {
    /// Layout of the sheet a row came from
    pub fn of(row: &Row) -> Self {
        let quantities = match (mass_column(row).is_some(), volume_column(row).is_some()) {
            (true, true) => QuantityColumns::MassAndVolume,
            (true, false) => QuantityColumns::MassOnly,
            (false, true) => QuantityColumns::VolumeOnly,
            (false, false) => QuantityColumns::None,
        };
        Self {
            identifier_column: row.contains_key(columns::SMILES),
            quantities,
        }
    }
}

impl Presence {
    /// Which recognised fields of the row are filled in
    pub fn of(row: &Row) -> Self {
        let filled = |key: Option<&str>, measured: bool| {
            key.and_then(|k| row.get(k)).is_some_and(|cell| {
                if measured {
                    cell.is_measured()
                } else {
                    cell.is_present()
                }
            })
        };
        Self {
            name: filled(Some(columns::NAME), false),
            identifier: filled(Some(columns::SMILES), false),
            mass: filled(mass_column(row), true),
            volume: filled(volume_column(row), true),
        }
    }
}

/// Classify a data row by its own columns and values
pub fn classify_row(row: &Row) -> RowClass {
    classify(RowLayout::of(row), Presence::of(row))
}
