/// Column names as constants for type safety
/// SMILES structural key identifying a compound
pub const SMILES: &str = "SMILES";
/// Operator-entered compound name
pub const NAME: &str = "Name";
/// Measured mass in grams
pub const MEASURED_MASS_G: &str = "Measured mass (g)";
/// Measured mass in milligrams
pub const MEASURED_MASS_MG: &str = "Measured mass (mg)";
/// Measured volume in microliters
pub const MEASURED_VOLUME_UL: &str = "Measured volume (μL)";
/// Measured volume in microliters, spelled with the micro sign (U+00B5)
pub const MEASURED_VOLUME_UL_MICRO_SIGN: &str = "Measured volume (µL)";

// Compound reference table
/// Display name column of the compound table
pub const COMPONENT: &str = "Component";
/// Density column of the compound table (g/mL)
pub const DENSITY: &str = "Density (g/mL)";
/// Molecular weight column of the compound table (g/mol)
pub const MOLECULAR_WEIGHT: &str = "Mwt. (g/mol)";

// General procedure keys
/// Whether photocontrol was used (`YES`/`NO`)
pub const PHOTOCONTROL: &str = "Photocontrol?";
/// Initiation method (`THERMAL`, `PHOTO` or `CHEMICAL`)
pub const INITIATION_METHOD: &str = "Initiation method";
/// Polymerization type (`FROMP` or `NONE`)
pub const POLYMERIZATION_TYPE: &str = "Type of polymerization";

/// Geometry keys that only make sense for a frontal polymerization
pub const FROMP_PROPERTIES: &[&str] = &[
    "Select Geometry from geometries tab",
    "Geometry - Select from library",
    "Resin height (mm)",
    "Diameter (mm)",
    "Thickness (mm)",
    "Tube length (mm)",
    "Empty-dim",
];
