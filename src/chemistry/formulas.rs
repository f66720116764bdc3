//! Role-specific derived quantities.
//!
//! Each formula takes the sample it describes plus the sibling lists it needs.
//! Peer lists are passed whole: a monomer's mole percent is computed against
//! the full monomer list, including itself.

use super::units::{checked_div, round2};
use super::{ChemistryError, Sample};

fn total_moles(samples: &[Sample]) -> f64 {
    samples.iter().map(Sample::moles).sum()
}

fn total_mass(samples: &[Sample]) -> f64 {
    samples.iter().map(Sample::mass).sum()
}

// Monomers

/// Share of the monomer's moles in the whole monomer list, in percent
pub fn monomer_mol_percent(monomer: &Sample, monomers: &[Sample]) -> Result<f64, ChemistryError> {
    let fraction = checked_div(monomer.moles(), total_moles(monomers), "monomer mol%")?;
    Ok(round2(fraction * 100.0))
}

/// Σ mass/density over the monomer list, in mL
pub fn monomer_volume(monomers: &[Sample]) -> f64 {
    monomers.iter().map(Sample::derived_volume).sum()
}

/// Mole-fraction weighted molecular weight of the monomer list
pub fn average_monomer_molecular_weight(monomers: &[Sample]) -> Result<f64, ChemistryError> {
    let denominator = total_moles(monomers);
    monomers.iter().try_fold(0.0, |average, monomer| {
        let mole_fraction = checked_div(
            monomer.moles(),
            denominator,
            "average monomer molecular weight",
        )?;
        Ok(average + mole_fraction * monomer.molecular_weight())
    })
}

// Catalysts

/// Moles of monomer per mole of catalyst
pub fn catalyst_monomer_molar_ratio(
    catalyst: &Sample,
    monomers: &[Sample],
) -> Result<f64, ChemistryError> {
    let average_mw = average_monomer_molecular_weight(monomers)?;
    let monomer_moles = checked_div(
        total_mass(monomers),
        average_mw,
        "monomer:catalyst molar ratio",
    )?;
    let ratio = checked_div(monomer_moles, catalyst.moles(), "monomer:catalyst molar ratio")?;
    Ok(round2(ratio))
}

// Inhibitors

/// Inhibitor mass for the ratio: the resolved mass, else volume × density
/// when both are known, else zero.
fn inhibitor_mass(inhibitor: &Sample) -> f64 {
    if inhibitor.mass() != 0.0 {
        return inhibitor.mass();
    }
    match inhibitor.volume() {
        Some(volume) if inhibitor.density().is_finite() && inhibitor.density() != 0.0 => {
            volume * inhibitor.density()
        }
        _ => 0.0,
    }
}

/// Moles of inhibitor per mole of catalyst.
///
/// The catalyst side divides the summed catalyst mass by the summed catalyst
/// molecular weights.
pub fn inhibitor_catalyst_molar_ratio(
    inhibitor: &Sample,
    catalysts: &[Sample],
) -> Result<f64, ChemistryError> {
    let catalysts_mass = total_mass(catalysts);
    let catalysts_molecular_weight: f64 = catalysts
        .iter()
        .map(|c| c.molecular_weight())
        .filter(|mw| !mw.is_nan())
        .sum();
    let denominator = checked_div(
        catalysts_mass,
        catalysts_molecular_weight,
        "inhibitor:catalyst molar ratio",
    )?;

    let inhibitor_moles = inhibitor_mass(inhibitor) / inhibitor.molecular_weight();
    let ratio = checked_div(inhibitor_moles, denominator, "inhibitor:catalyst molar ratio")?;
    Ok(round2(ratio))
}

// Solvents

/// Solvent volume (mL) per gram of catalyst
pub fn solvent_concentration(solvent: &Sample, catalyst: &Sample) -> Result<f64, ChemistryError> {
    let concentration = checked_div(
        solvent.resolved_volume(),
        catalyst.mass(),
        "solvent concentration",
    )?;
    Ok(round2(concentration))
}

// Additives

/// Solvent contribution to the formulation mass: volume × density, or zero
/// when the solvent was weighed or has no density.
fn solvent_mass_from_volume(solvent: &Sample) -> f64 {
    match solvent.volume() {
        Some(volume) if !solvent.density().is_nan() => volume * solvent.density(),
        _ => 0.0,
    }
}

/// Additive mass as a percentage of the whole formulation mass
pub fn additive_weight_percent(
    additive: &Sample,
    additives: &[Sample],
    monomers: &[Sample],
    catalysts: &[Sample],
    solvents: &[Sample],
) -> Result<f64, ChemistryError> {
    let formulation_mass = total_mass(monomers)
        + total_mass(additives)
        + total_mass(catalysts)
        + solvents.iter().map(solvent_mass_from_volume).sum::<f64>();

    let fraction = checked_div(additive.mass(), formulation_mass, "additive weight percent")?;
    Ok(round2(fraction * 100.0))
}

/// Σ measured volume, or mass/density when weighed, over the additive list
pub fn additive_volume_total(additives: &[Sample]) -> f64 {
    additives.iter().map(Sample::resolved_volume).sum()
}

/// Volume of the whole formulation in mL
pub fn total_volume(
    additives: &[Sample],
    monomers: &[Sample],
    inhibitor: &Sample,
    solvent: &Sample,
) -> f64 {
    additive_volume_total(additives)
        + monomer_volume(monomers)
        + inhibitor.resolved_volume()
        + solvent.resolved_volume()
}
