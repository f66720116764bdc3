use std::collections::HashMap;

use crate::chemistry::formulas::{
    additive_weight_percent, catalyst_monomer_molar_ratio, inhibitor_catalyst_molar_ratio,
    monomer_mol_percent, solvent_concentration,
};
use crate::chemistry::units::format_moles;
use crate::chemistry::{CompoundDatabase, InitiatorSummary, Sample};
use crate::ingest::{CellValue, InputSheet, ProcedureMap, Row};
use crate::report::{ReportSink, ValidationCheck};
use crate::schema::columns;

use super::records::*;
use super::{BatchError, Category};

/// Validated input sheets of one batch, by category
#[derive(Debug, Clone, Default)]
pub struct BatchInputs {
    sheets: HashMap<Category, InputSheet>,
}

impl BatchInputs {
    /// Create an empty set of inputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the ingested sheet of a category
    pub fn insert(&mut self, category: Category, sheet: InputSheet) {
        self.sheets.insert(category, sheet);
    }

    /// Ingested sheet of a category
    pub fn get(&self, category: Category) -> Option<&InputSheet> {
        self.sheets.get(&category)
    }

    /// Kept rows of a category; empty when the sheet is absent
    pub fn rows(&self, category: Category) -> &[Row] {
        self.get(category).map(|s| s.rows.as_slice()).unwrap_or(&[])
    }

    /// Procedure block of a category; empty when the sheet is absent
    pub fn procedure(&self, category: Category) -> ProcedureMap {
        self.get(category)
            .map(|s| s.procedure.clone())
            .unwrap_or_default()
    }
}

/// One sample per kept row, per category
#[derive(Debug, Clone, Default)]
pub struct Batch {
    /// Monomer samples
    pub monomers: Vec<Sample>,
    /// Catalyst samples
    pub catalysts: Vec<Sample>,
    /// Inhibitor samples
    pub inhibitors: Vec<Sample>,
    /// Additive samples
    pub additives: Vec<Sample>,
    /// Solvent samples
    pub solvents: Vec<Sample>,
    /// Chemical initiation samples
    pub initiators: Vec<Sample>,
}

impl Batch {
    /// Samples of a category
    pub fn samples(&self, category: Category) -> &[Sample] {
        match category {
            Category::Monomers => &self.monomers,
            Category::Catalysts => &self.catalysts,
            Category::Inhibitors => &self.inhibitors,
            Category::Additives => &self.additives,
            Category::Solvents => &self.solvents,
            Category::Initiators => &self.initiators,
        }
    }

    fn samples_mut(&mut self, category: Category) -> &mut Vec<Sample> {
        match category {
            Category::Monomers => &mut self.monomers,
            Category::Catalysts => &mut self.catalysts,
            Category::Inhibitors => &mut self.inhibitors,
            Category::Additives => &mut self.additives,
            Category::Solvents => &mut self.solvents,
            Category::Initiators => &mut self.initiators,
        }
    }
}

fn smiles_of(row: &Row) -> String {
    row.get(columns::SMILES)
        .and_then(|cell| cell.to_key())
        .unwrap_or_default()
}

fn name_of(row: &Row) -> CellValue {
    row.cell(columns::NAME)
}

/// Builds samples and derived records for a batch.
///
/// The compound table is shared read-only; every check is handed to the
/// injected report sink.
pub struct BatchAssembler<'db, S: ReportSink> {
    pub(super) db: &'db CompoundDatabase,
    pub(super) report: S,
}

impl<'db, S: ReportSink> BatchAssembler<'db, S> {
    /// Create an assembler over a loaded compound table
    pub fn new(db: &'db CompoundDatabase, report: S) -> Self {
        Self { db, report }
    }

    /// Give back the sink
    pub fn into_report(self) -> S {
        self.report
    }

    /// Check every SMILES of every category against the compound table.
    ///
    /// Runs before any sample is built, so an unknown compound anywhere in
    /// the batch aborts it without partial results.
    pub fn validate_identifiers(&mut self, inputs: &BatchInputs) -> Result<(), BatchError> {
        for category in Category::ALL {
            let identifiers: Vec<String> = inputs.rows(category).iter().map(smiles_of).collect();
            if let Err(e) = self.db.validate_all(identifiers.iter().map(String::as_str)) {
                self.report.record(ValidationCheck::failed(
                    format!("{} compounds known", category),
                    e.to_string(),
                ));
                return Err(e.into());
            }
            self.report.record(ValidationCheck::ok(format!(
                "{} compounds known ({})",
                category,
                identifiers.len()
            )));
        }
        Ok(())
    }

    fn sample_for_row(&mut self, category: Category, row: &Row) -> Result<Sample, BatchError> {
        let smiles = smiles_of(row);
        let mass = MeasuredMass::of(row).value_g;
        let volume = if category.accepts_volume() {
            MeasuredVolume::of(row).value_ml
        } else {
            None
        };

        let sample = match category.role() {
            Some(role) => Sample::new(&smiles, self.db, role, mass, volume),
            None => Sample::initiator(&smiles, self.db, None, mass, volume),
        }
        .map_err(|source| BatchError::Sample {
            sheet: category.sheet_name().to_string(),
            smiles: smiles.clone(),
            source,
        })?;

        if sample.observed_mass().is_none() && sample.density().is_nan() {
            self.report.record(ValidationCheck::warning(
                format!("{} density", smiles),
                "compound has no density; mass from volume resolved to 0.0",
            ));
        }
        Ok(sample)
    }

    /// Validate identifiers, then build one sample per kept row
    pub fn build_batch(&mut self, inputs: &BatchInputs) -> Result<Batch, BatchError> {
        self.validate_identifiers(inputs)?;

        let mut batch = Batch::default();
        for category in Category::ALL {
            for row in inputs.rows(category) {
                let sample = self.sample_for_row(category, row)?;
                batch.samples_mut(category).push(sample);
            }
        }

        log::info!(
            "Built batch: {} monomers, {} catalysts, {} inhibitors, {} additives, {} solvents, {} initiators",
            batch.monomers.len(),
            batch.catalysts.len(),
            batch.inhibitors.len(),
            batch.additives.len(),
            batch.solvents.len(),
            batch.initiators.len()
        );
        Ok(batch)
    }

    /// Build the batch and compute every category's derived records
    pub fn compute_values(&mut self, inputs: &BatchInputs) -> Result<DerivedInputs, BatchError> {
        let batch = self.build_batch(inputs)?;
        let derived = derive_records(&batch, inputs)?;
        self.report.record(ValidationCheck::ok("Derived values computed"));
        Ok(derived)
    }
}

/// Derived record lists for an already built batch
pub fn derive_records(batch: &Batch, inputs: &BatchInputs) -> Result<DerivedInputs, BatchError> {
    let rows =
        move |category: Category| inputs.rows(category).iter().zip(batch.samples(category));

    let monomers = rows(Category::Monomers)
        .map(|(row, sample)| -> Result<MonomerRecord, BatchError> {
            let mass = MeasuredMass::of(row);
            Ok(MonomerRecord {
                name: name_of(row),
                smiles: sample.smiles().to_string(),
                measured_mass_g: mass.grams,
                measured_volume_ul: MeasuredVolume::of(row).microliters,
                computed_mass_g: sample.mass(),
                molecular_weight: sample.molecular_weight(),
                moles: format_moles(sample.moles()),
                mol_percent: monomer_mol_percent(sample, &batch.monomers)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let catalysts = rows(Category::Catalysts)
        .map(|(row, sample)| -> Result<CatalystRecord, BatchError> {
            Ok(CatalystRecord {
                name: name_of(row),
                smiles: sample.smiles().to_string(),
                measured_mass_mg: MeasuredMass::of(row).milligrams,
                computed_mass_g: sample.mass(),
                molecular_weight: sample.molecular_weight(),
                moles: format_moles(sample.moles()),
                monomer_catalyst_ratio: catalyst_monomer_molar_ratio(sample, &batch.monomers)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let inhibitors = rows(Category::Inhibitors)
        .map(|(row, sample)| -> Result<InhibitorRecord, BatchError> {
            Ok(InhibitorRecord {
                name: name_of(row),
                smiles: sample.smiles().to_string(),
                measured_volume_ul: MeasuredVolume::of(row).microliters,
                density: sample.density(),
                computed_mass_g: sample.mass(),
                molecular_weight: sample.molecular_weight(),
                moles: format_moles(sample.moles()),
                inhibitor_catalyst_ratio: inhibitor_catalyst_molar_ratio(sample, &batch.catalysts)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let additives = rows(Category::Additives)
        .map(|(row, sample)| -> Result<AdditiveRecord, BatchError> {
            Ok(AdditiveRecord {
                name: name_of(row),
                smiles: sample.smiles().to_string(),
                measured_mass_g: MeasuredMass::of(row).grams,
                measured_volume_ul: MeasuredVolume::of(row).microliters,
                computed_mass_g: sample.mass(),
                molecular_weight: sample.molecular_weight(),
                moles: format_moles(sample.moles()),
                weight_percent: additive_weight_percent(
                    sample,
                    &batch.additives,
                    &batch.monomers,
                    &batch.catalysts,
                    &batch.solvents,
                )?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let solvents = rows(Category::Solvents)
        .map(|(row, sample)| -> Result<SolventRecord, BatchError> {
            let catalyst = batch.catalysts.first().ok_or(BatchError::MissingCatalyst)?;
            Ok(SolventRecord {
                name: name_of(row),
                smiles: sample.smiles().to_string(),
                measured_mass_mg: MeasuredMass::of(row).milligrams,
                measured_volume_ul: MeasuredVolume::of(row).microliters,
                computed_mass_g: sample.mass(),
                molecular_weight: sample.molecular_weight(),
                moles: format_moles(sample.moles()),
                concentration: solvent_concentration(sample, catalyst)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let initiators = rows(Category::Initiators)
        .map(|(row, sample)| InitiatorRecord {
            name: name_of(row),
            smiles: sample.smiles().to_string(),
            role: sample
                .initiator_role()
                .map(|r| r.as_str().to_string())
                .unwrap_or_default(),
            measured_mass_mg: MeasuredMass::of(row).milligrams,
            measured_volume_ul: MeasuredVolume::of(row).microliters,
            molecular_weight: sample.molecular_weight(),
            moles: format_moles(sample.moles()),
        })
        .collect::<Vec<_>>();

    let output = |category: Category| (category.output_prefix(), inputs.procedure(category));

    let (prefix, procedure) = output(Category::Monomers);
    let monomers = CategoryOutput::new(prefix, monomers, procedure);
    let (prefix, procedure) = output(Category::Catalysts);
    let catalysts = CategoryOutput::new(prefix, catalysts, procedure);
    let (prefix, procedure) = output(Category::Inhibitors);
    let inhibitors = CategoryOutput::new(prefix, inhibitors, procedure);
    let (prefix, procedure) = output(Category::Additives);
    let additives = CategoryOutput::new(prefix, additives, procedure);
    let (prefix, procedure) = output(Category::Solvents);
    let solvents = CategoryOutput::new(prefix, solvents, procedure);

    let (prefix, procedure) = output(Category::Initiators);
    let mut chemical_initiation = CategoryOutput::new(prefix, initiators, procedure);
    chemical_initiation.concentration =
        InitiatorSummary::from_samples(&batch.initiators).concentration();

    Ok(DerivedInputs {
        monomers,
        catalysts,
        inhibitors,
        additives,
        solvents,
        chemical_initiation: Some(chemical_initiation),
    })
}
