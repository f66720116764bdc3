/// Errors raised by the compound table and the derived-value formulas
#[derive(Debug, thiserror::Error)]
pub enum ChemistryError {
    /// I/O error reading the compound table
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error in the compound table
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Required column absent from the compound table
    #[error("Missing required compound table column: {0}")]
    MissingColumn(String),

    /// The key column of the compound table is not unique
    #[error("There are duplicate entries in the chemistry database: {0}")]
    DuplicateKey(String),

    /// Identifier not present in the compound table
    #[error("{0} not in Chemistry Database")]
    NotFound(String),

    /// Compound present but without a usable molecular weight
    #[error("{0} does not have a molecular weight in chemistry database")]
    MissingMolecularWeight(String),

    /// Neither a mass nor a volume was supplied for a sample
    #[error("Volume or mass must be specified")]
    MissingQuantity,

    /// Sample constructed with an empty identifier
    #[error("Smiles field must be specified")]
    MissingIdentifier,

    /// Both a mass and a volume were supplied for a sample
    #[error("Only specify one of mass or volume")]
    ConflictingQuantities,

    /// A derived quantity would divide by zero
    #[error("Cannot compute {quantity}: denominator is zero")]
    ZeroDenominator {
        /// Name of the quantity being computed
        quantity: &'static str,
    },
}
