/// The one workbook version accepted by the batch assembler
pub const SUPPORTED_WORKBOOK_VERSION: &str = "3.0";

/// First-column marker separating data rows from procedure rows
pub const PROCEDURE_MARKER: &str = "PROCEDURE";

/// Cell placeholder meaning "not measured"
pub const MISSING_PLACEHOLDER: &str = "-";

/// Divisor converting milligrams to grams and microliters to milliliters
pub const MILLI_PER_UNIT: f64 = 1000.0;

/// Scale applied to the initiator solvent volume for the moles concentration
pub const INITIATOR_MOLES_VOLUME_SCALE: f64 = 10e6;

/// Initiation method value for chemically initiated batches
pub const INITIATION_CHEMICAL: &str = "CHEMICAL";

/// Polymerization type value for frontal polymerization
pub const POLYMERIZATION_FROMP: &str = "FROMP";

/// Polymerization type value when no polymerization is run
pub const POLYMERIZATION_NONE: &str = "NONE";

/// Photocontrol value meaning photocontrol was not used
pub const PHOTOCONTROL_NO: &str = "NO";
