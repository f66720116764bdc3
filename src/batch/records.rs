use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::chemistry::units::{g_to_mg, mg_to_g, ul_to_ml};
use crate::chemistry::InitiatorConcentration;
use crate::ingest::classify::{mass_column, volume_column};
use crate::ingest::{CellValue, ProcedureMap, Row};
use crate::schema::columns;

/// Measured mass of a row in both units, as echoed in the output
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredMass {
    /// Gram column, or the milligram value converted
    pub grams: CellValue,
    /// Milligram column, or the gram value converted
    pub milligrams: CellValue,
    /// Mass in grams used for computation
    pub value_g: Option<f64>,
}

impl MeasuredMass {
    /// Read the preferred mass column of a row and derive the other unit
    pub fn of(row: &Row) -> Self {
        match mass_column(row) {
            Some(columns::MEASURED_MASS_G) => {
                let grams = row.cell(columns::MEASURED_MASS_G);
                let value_g = grams.as_quantity();
                let milligrams = match value_g {
                    Some(g) => CellValue::Number(g_to_mg(g)),
                    None => row.get(columns::MEASURED_MASS_MG).cloned().unwrap_or_else(|| grams.clone()),
                };
                Self {
                    grams,
                    milligrams,
                    value_g,
                }
            }
            Some(column) => {
                let milligrams = row.cell(column);
                let value_g = milligrams.as_quantity().map(mg_to_g);
                let grams = value_g.map(CellValue::Number).unwrap_or_else(|| milligrams.clone());
                Self {
                    grams,
                    milligrams,
                    value_g,
                }
            }
            None => Self {
                grams: CellValue::Empty,
                milligrams: CellValue::Empty,
                value_g: None,
            },
        }
    }
}

/// Measured volume of a row
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredVolume {
    /// Microliter cell as entered
    pub microliters: CellValue,
    /// Volume in mL used for computation
    pub value_ml: Option<f64>,
}

impl MeasuredVolume {
    /// Read the volume column of a row and convert to mL
    pub fn of(row: &Row) -> Self {
        let microliters = volume_column(row).map(|c| row.cell(c)).unwrap_or_default();
        let value_ml = microliters.as_quantity().map(ul_to_ml);
        Self {
            microliters,
            value_ml,
        }
    }
}

/// Derived values of one monomer row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonomerRecord {
    /// Name as entered
    pub name: CellValue,
    /// SMILES key
    #[serde(rename = "SMILES")]
    pub smiles: String,
    /// Measured mass in grams
    #[serde(rename = "Measured mass (g)")]
    pub measured_mass_g: CellValue,
    /// Measured volume in microliters
    #[serde(rename = "Measured volume (μL)")]
    pub measured_volume_ul: CellValue,
    /// Resolved mass in grams
    #[serde(rename = "Computed mass (g)")]
    pub computed_mass_g: f64,
    /// Molecular weight
    #[serde(rename = "Molecular Weight (g/mol)")]
    pub molecular_weight: f64,
    /// Moles in scientific notation
    #[serde(rename = "Moles")]
    pub moles: String,
    /// Share of the monomer moles
    #[serde(rename = "Monomer mol%")]
    pub mol_percent: f64,
}

/// Derived values of one catalyst row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalystRecord {
    /// Name as entered
    pub name: CellValue,
    /// SMILES key
    #[serde(rename = "SMILES")]
    pub smiles: String,
    /// Measured mass in milligrams
    #[serde(rename = "Measured mass (mg)")]
    pub measured_mass_mg: CellValue,
    /// Resolved mass in grams
    #[serde(rename = "Computed mass (g)")]
    pub computed_mass_g: f64,
    /// Molecular weight
    #[serde(rename = "Molecular Weight (g/mol)")]
    pub molecular_weight: f64,
    /// Moles in scientific notation
    #[serde(rename = "Moles")]
    pub moles: String,
    /// Monomer moles per catalyst mole
    #[serde(rename = "Monomer:Catalyst molar ratio")]
    pub monomer_catalyst_ratio: f64,
}

/// Derived values of one inhibitor row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InhibitorRecord {
    /// Name as entered
    pub name: CellValue,
    /// SMILES key
    #[serde(rename = "SMILES")]
    pub smiles: String,
    /// Measured volume in microliters
    #[serde(rename = "Measured volume (μL)")]
    pub measured_volume_ul: CellValue,
    /// Density from the compound table
    #[serde(rename = "Density")]
    pub density: f64,
    /// Resolved mass in grams
    #[serde(rename = "Computed mass (g)")]
    pub computed_mass_g: f64,
    /// Molecular weight
    #[serde(rename = "Molecular Weight (g/mol)")]
    pub molecular_weight: f64,
    /// Moles in scientific notation
    #[serde(rename = "Moles")]
    pub moles: String,
    /// Inhibitor moles per catalyst mole
    #[serde(rename = "Inhibitor:Catalyst molar ratio")]
    pub inhibitor_catalyst_ratio: f64,
}

/// Derived values of one additive row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditiveRecord {
    /// Name as entered
    pub name: CellValue,
    /// SMILES key
    #[serde(rename = "SMILES")]
    pub smiles: String,
    /// Measured mass in grams
    #[serde(rename = "Measured mass (g)")]
    pub measured_mass_g: CellValue,
    /// Measured volume in microliters
    #[serde(rename = "Measured volume (μL)")]
    pub measured_volume_ul: CellValue,
    /// Resolved mass in grams
    #[serde(rename = "Computed mass (g)")]
    pub computed_mass_g: f64,
    /// Molecular weight
    #[serde(rename = "Molecular Weight (g/mol)")]
    pub molecular_weight: f64,
    /// Moles in scientific notation
    #[serde(rename = "Moles")]
    pub moles: String,
    /// Additive mass share of the formulation
    #[serde(rename = "Wt Percent of Additives")]
    pub weight_percent: f64,
}

/// Derived values of one solvent row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolventRecord {
    /// Name as entered
    pub name: CellValue,
    /// SMILES key
    #[serde(rename = "SMILES")]
    pub smiles: String,
    /// Measured mass in milligrams
    #[serde(rename = "Measured mass (mg)")]
    pub measured_mass_mg: CellValue,
    /// Measured volume in microliters
    #[serde(rename = "Measured volume (μL)")]
    pub measured_volume_ul: CellValue,
    /// Resolved mass in grams
    #[serde(rename = "Computed mass (g)")]
    pub computed_mass_g: f64,
    /// Molecular weight
    #[serde(rename = "Molecular Weight (g/mol)")]
    pub molecular_weight: f64,
    /// Moles in scientific notation
    #[serde(rename = "Moles")]
    pub moles: String,
    /// Solvent mL per gram of the first catalyst
    #[serde(rename = "Solvent concentration (mL/g)")]
    pub concentration: f64,
}

/// Echoed values of one chemical initiation row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitiatorRecord {
    /// Name as entered
    pub name: CellValue,
    /// SMILES key
    #[serde(rename = "SMILES")]
    pub smiles: String,
    /// Inferred initiator role
    #[serde(rename = "Role")]
    pub role: String,
    /// Measured mass in milligrams
    #[serde(rename = "Measured mass (mg)")]
    pub measured_mass_mg: CellValue,
    /// Measured volume in microliters
    #[serde(rename = "Measured volume (μL)")]
    pub measured_volume_ul: CellValue,
    /// Molecular weight
    #[serde(rename = "Molecular Weight (g/mol)")]
    pub molecular_weight: f64,
    /// Moles in scientific notation
    #[serde(rename = "Moles")]
    pub moles: String,
}

/// Derived records and procedure block of one category.
///
/// Serialized as `{ "<prefix>-inputs": [...], "<prefix>-procedure": {...} }`,
/// preceded by the initiator concentration when there is one.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOutput<R> {
    /// Output key prefix
    pub prefix: &'static str,
    /// One record per kept row
    pub records: Vec<R>,
    /// Procedure block of the sheet
    pub procedure: ProcedureMap,
    /// Catalyst-in-solvent concentration (chemical initiation only)
    pub concentration: Option<InitiatorConcentration>,
}

impl<R> CategoryOutput<R> {
    /// Records and procedure of a category without an aggregate figure
    pub fn new(prefix: &'static str, records: Vec<R>, procedure: ProcedureMap) -> Self {
        Self {
            prefix,
            records,
            procedure,
            concentration: None,
        }
    }
}

impl<R: Serialize> Serialize for CategoryOutput<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(concentration) = &self.concentration {
            map.serialize_entry(
                "initiator-catalyst-solvent-concentration-mg/microL",
                &concentration.mass_per_volume,
            )?;
            map.serialize_entry(
                "initiator-catalyst-solvent-concentration-moles/L",
                &concentration.moles_per_volume,
            )?;
        }
        map.serialize_entry(&format!("{}-inputs", self.prefix), &self.records)?;
        map.serialize_entry(&format!("{}-procedure", self.prefix), &self.procedure)?;
        map.end()
    }
}

/// Derived records of every input category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedInputs {
    /// Monomer records
    pub monomers: CategoryOutput<MonomerRecord>,
    /// Catalyst records
    pub catalysts: CategoryOutput<CatalystRecord>,
    /// Inhibitor records
    pub inhibitors: CategoryOutput<InhibitorRecord>,
    /// Additive records
    pub additives: CategoryOutput<AdditiveRecord>,
    /// Solvent records
    pub solvents: CategoryOutput<SolventRecord>,
    /// Chemical initiation records; moved into the procedure tree by experiment assembly
    #[serde(rename = "chemical initiation", skip_serializing_if = "Option::is_none")]
    pub chemical_initiation: Option<CategoryOutput<InitiatorRecord>>,
}
