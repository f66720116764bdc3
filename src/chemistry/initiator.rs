use serde::Serialize;

use crate::schema::INITIATOR_MOLES_VOLUME_SCALE;

use super::{InitiatorRole, Sample};

/// Per-role totals over a chemical initiation list
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InitiatorSummary {
    /// Σ moles of catalyst-role initiators
    pub catalyst_moles: f64,
    /// Σ mass (g) of catalyst-role initiators
    pub catalyst_mass: f64,
    /// Σ volume (mL) of solvent-role initiators
    pub solvent_volume: f64,
}

/// Concentration of the initiating catalyst in its carrier solvent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InitiatorConcentration {
    /// Catalyst mass per solvent volume
    #[serde(rename = "initiator-catalyst-solvent-concentration-mg/microL")]
    pub mass_per_volume: f64,
    /// Catalyst moles per scaled solvent volume
    #[serde(rename = "initiator-catalyst-solvent-concentration-moles/L")]
    pub moles_per_volume: f64,
}

impl InitiatorSummary {
    /// Accumulate totals by initiator role; non-initiators are ignored
    pub fn from_samples(initiators: &[Sample]) -> Self {
        initiators
            .iter()
            .fold(Self::default(), |mut summary, sample| {
                match sample.initiator_role() {
                    Some(InitiatorRole::Catalyst) => {
                        summary.catalyst_moles += sample.moles();
                        summary.catalyst_mass += sample.mass();
                    }
                    Some(InitiatorRole::Solvent) => {
                        summary.solvent_volume += sample.volume().unwrap_or(0.0);
                    }
                    None => {}
                }
                summary
            })
    }

    /// Catalyst-in-solvent concentration; `None` when there is no solvent volume
    pub fn concentration(&self) -> Option<InitiatorConcentration> {
        if self.solvent_volume == 0.0 {
            return None;
        }
        Some(InitiatorConcentration {
            mass_per_volume: self.catalyst_mass / self.solvent_volume,
            moles_per_volume: self.catalyst_moles
                / (self.solvent_volume * INITIATOR_MOLES_VOLUME_SCALE),
        })
    }
}
