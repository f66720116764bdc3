/// Monomer input sheet
pub const MONOMERS: &str = "monomers";
/// Catalyst input sheet
pub const CATALYSTS: &str = "catalysts";
/// Inhibitor input sheet
pub const INHIBITORS: &str = "inhibitors";
/// Additive input sheet
pub const ADDITIVES: &str = "additives";
/// Solvent input sheet
pub const SOLVENTS: &str = "solvents";
/// Chemical initiation input sheet
pub const CHEMICAL_INITIATION: &str = "chemical initiation";

/// General procedure sheet
pub const GENERAL: &str = "general";
/// Thermal initiation procedure sheet
pub const THERMAL_INITIATION: &str = "thermal initiation";
/// Photo initiation procedure sheet
pub const PHOTO_INITIATION: &str = "photo initiation";
/// Photo control procedure sheet
pub const PHOTO_CONTROL: &str = "photo control";
/// Frontal polymerization measurement sheet
pub const FROMP_MEASUREMENTS: &str = "FROMP Measurements";
/// Library of geometries, never extracted
pub const GEOMETRIES: &str = "geometries";

/// Sheets holding only key/value procedure rows
pub const PROCEDURE_SHEETS: &[&str] = &[GENERAL, THERMAL_INITIATION, PHOTO_INITIATION, PHOTO_CONTROL];

/// Initiation method value paired with the procedure sheet it keeps
pub const INITIATION_TABS: &[(&str, &str)] = &[("THERMAL", THERMAL_INITIATION), ("PHOTO", PHOTO_INITIATION)];
