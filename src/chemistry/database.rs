use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::schema::columns;

use super::ChemistryError;

/// One row of the compound reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundRecord {
    /// SMILES structural key (unique)
    #[serde(rename = "SMILES")]
    pub smiles: String,

    /// Display name of the compound
    #[serde(rename = "Component", default)]
    pub name: String,

    /// Density in g/mL, when known
    #[serde(
        rename = "Density (g/mL)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub density: Option<f64>,

    /// Molecular weight in g/mol, when known
    #[serde(
        rename = "Mwt. (g/mol)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub molecular_weight: Option<f64>,
}

impl CompoundRecord {
    /// Create a record with both physical constants known
    pub fn new(smiles: &str, name: &str, density: f64, molecular_weight: f64) -> Self {
        Self {
            smiles: smiles.to_string(),
            name: name.to_string(),
            density: Some(density),
            molecular_weight: Some(molecular_weight),
        }
    }

    fn has_molecular_weight(&self) -> bool {
        matches!(self.molecular_weight, Some(mw) if mw.is_finite() && mw != 0.0)
    }
}

/// Read-only compound reference table keyed by SMILES
#[derive(Debug, Clone, Default)]
pub struct CompoundDatabase {
    records: Vec<CompoundRecord>,
    index: HashMap<String, usize>,
}

impl CompoundDatabase {
    /// Build the SMILES index, failing if any key appears twice
    pub fn load(records: Vec<CompoundRecord>) -> Result<Self, ChemistryError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.smiles.clone(), position).is_some() {
                return Err(ChemistryError::DuplicateKey(record.smiles.clone()));
            }
        }

        log::debug!("Loaded {} compounds into the chemistry database", records.len());
        Ok(Self { records, index })
    }

    /// Load the compound table from a CSV file
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, ChemistryError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load the compound table from CSV text
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ChemistryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if !headers.iter().any(|h| h == columns::SMILES) {
            return Err(ChemistryError::MissingColumn(columns::SMILES.to_string()));
        }

        let records = csv_reader
            .deserialize::<CompoundRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::load(records)
    }

    /// Number of compounds in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a compound with this SMILES is present
    pub fn exists(&self, smiles: &str) -> bool {
        self.index.contains_key(smiles)
    }

    /// Check every non-empty identifier for presence and a usable molecular
    /// weight, stopping at the first failure.
    pub fn validate_all<'a, I>(&self, identifiers: I) -> Result<(), ChemistryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for smiles in identifiers.into_iter().filter(|s| !s.is_empty()) {
            let record = self
                .get(smiles)
                .ok_or_else(|| ChemistryError::NotFound(smiles.to_string()))?;
            if !record.has_molecular_weight() {
                return Err(ChemistryError::MissingMolecularWeight(smiles.to_string()));
            }
        }
        Ok(())
    }

    /// Full record for a compound
    pub fn get(&self, smiles: &str) -> Option<&CompoundRecord> {
        self.index.get(smiles).map(|&i| &self.records[i])
    }

    /// Density in g/mL; NaN when the table has no value
    pub fn density(&self, smiles: &str) -> Result<f64, ChemistryError> {
        self.lookup(smiles)
            .map(|record| record.density.unwrap_or(f64::NAN))
    }

    /// Molecular weight in g/mol; NaN when the table has no value
    pub fn molecular_weight(&self, smiles: &str) -> Result<f64, ChemistryError> {
        self.lookup(smiles)
            .map(|record| record.molecular_weight.unwrap_or(f64::NAN))
    }

    /// Display name
    pub fn name(&self, smiles: &str) -> Result<&str, ChemistryError> {
        self.lookup(smiles).map(|record| record.name.as_str())
    }

    /// Iterate over all records in table order
    pub fn iter(&self) -> impl Iterator<Item = &CompoundRecord> {
        self.records.iter()
    }

    fn lookup(&self, smiles: &str) -> Result<&CompoundRecord, ChemistryError> {
        self.get(smiles)
            .ok_or_else(|| ChemistryError::NotFound(smiles.to_string()))
    }
}
