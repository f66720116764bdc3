use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ChemistryError, CompoundDatabase};

/// How an initiator takes part in the chemical initiation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitiatorRole {
    /// Dissolved initiating species, dosed by mass
    Catalyst,
    /// Carrier solvent, dosed by volume
    Solvent,
}

impl InitiatorRole {
    /// Explicit role if given, otherwise solvent when a volume was measured
    pub fn infer(explicit: Option<InitiatorRole>, volume_supplied: bool) -> Self {
        explicit.unwrap_or(if volume_supplied {
            InitiatorRole::Solvent
        } else {
            InitiatorRole::Catalyst
        })
    }

    /// Label written to the output records
    pub fn as_str(&self) -> &'static str {
        match self {
            InitiatorRole::Catalyst => "Catalyst",
            InitiatorRole::Solvent => "Solvent",
        }
    }
}

impl fmt::Display for InitiatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formulation category a sample belongs to; selects the formulas that apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Polymerizable monomer
    Monomer,
    /// Polymerization catalyst
    Catalyst,
    /// Catalyst inhibitor
    Inhibitor,
    /// Catalyst solvent
    Solvent,
    /// Non-reactive additive (filler, dye, ...)
    Additive,
    /// Chemical initiation component
    Initiator(InitiatorRole),
}

/// One compound instance with its observed and resolved quantities.
///
/// Exactly one of mass (g) or volume (mL) is observed; the mass is always
/// resolved after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    smiles: String,
    role: Role,
    observed_mass: Option<f64>,
    volume: Option<f64>,
    mass: f64,
    density: f64,
    molecular_weight: f64,
}

/// A measured quantity counts only when present and non-zero
fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

impl Sample {
    /// Build a sample from the compound table and one observed quantity.
    ///
    /// `volume` must already be in mL. Initiators passed as
    /// `Role::Initiator(_)` keep the given role; use [`Sample::initiator`] to
    /// infer it from the quantities.
    pub fn new(
        smiles: &str,
        db: &CompoundDatabase,
        role: Role,
        mass: Option<f64>,
        volume: Option<f64>,
    ) -> Result<Self, ChemistryError> {
        let mass = supplied(mass);
        let volume = supplied(volume);

        if mass.is_none() && volume.is_none() {
            return Err(ChemistryError::MissingQuantity);
        }
        if smiles.is_empty() {
            return Err(ChemistryError::MissingIdentifier);
        }
        if mass.is_some() && volume.is_some() {
            return Err(ChemistryError::ConflictingQuantities);
        }

        let density = db.density(smiles)?;
        let molecular_weight = db.molecular_weight(smiles)?;

        let resolved_mass = match (mass, volume) {
            (Some(m), _) => m,
            (None, Some(v)) => mass_from_volume(v, density),
            (None, None) => return Err(ChemistryError::MissingQuantity),
        };

        if mass.is_none() && density.is_nan() {
            log::debug!("{} has no density; mass from volume resolved to 0.0", smiles);
        }

        Ok(Self {
            smiles: smiles.to_string(),
            role,
            observed_mass: mass,
            volume,
            mass: resolved_mass,
            density,
            molecular_weight,
        })
    }

    /// Build an initiator, inferring its role when none is given
    pub fn initiator(
        smiles: &str,
        db: &CompoundDatabase,
        role: Option<InitiatorRole>,
        mass: Option<f64>,
        volume: Option<f64>,
    ) -> Result<Self, ChemistryError> {
        let role = InitiatorRole::infer(role, supplied(volume).is_some());
        Self::new(smiles, db, Role::Initiator(role), mass, volume)
    }

    /// SMILES key
    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    /// Formulation role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Initiator role, if this is an initiator
    pub fn initiator_role(&self) -> Option<InitiatorRole> {
        match self.role {
            Role::Initiator(role) => Some(role),
            _ => None,
        }
    }

    /// Resolved mass in grams
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Mass as measured, if the sample was dosed by mass
    pub fn observed_mass(&self) -> Option<f64> {
        self.observed_mass
    }

    /// Volume in mL as measured, if the sample was dosed by volume
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// Density in g/mL (NaN when unknown)
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Molecular weight in g/mol
    pub fn molecular_weight(&self) -> f64 {
        self.molecular_weight
    }

    /// mass / molecular weight
    pub fn moles(&self) -> f64 {
        self.mass / self.molecular_weight
    }

    /// mass / density, regardless of how the sample was measured
    pub fn derived_volume(&self) -> f64 {
        self.mass / self.density
    }

    /// Measured volume, or the volume derived from mass and density
    pub fn resolved_volume(&self) -> f64 {
        self.volume.unwrap_or_else(|| self.derived_volume())
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} - Mass: {}, Volume: {:?}, Moles {}",
            self.role,
            self.smiles,
            self.mass,
            self.volume,
            self.moles()
        )
    }
}

/// volume × density, or exactly 0.0 when the density is unknown
pub fn mass_from_volume(volume: f64, density: f64) -> f64 {
    if density.is_nan() {
        return 0.0;
    }
    volume * density
}
