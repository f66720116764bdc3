use super::formulas::*;
use super::units::{format_moles, round2};
use super::*;
use proptest::prelude::*;

const DICYCLOPENTADIENE: &str = "C1C=CC2C1C3CC2C=C3";
const ENB: &str = "CC=C1CC2CC1C=C2";
const GRUBBS: &str = "GC2";
const TBP: &str = "CCCCOP(OCCCC)OCCCC";
const TOLUENE: &str = "Cc1ccccc1";
const CARBON_BLACK: &str = "[C]";

const COMPOUND_TABLE: &str = "\
SMILES,Component,Density (g/mL),Mwt. (g/mol)
C1C=CC2C1C3CC2C=C3,Dicyclopentadiene,0.98,132.2
CC=C1CC2CC1C=C2,5-Ethylidene-2-norbornene,0.893,120.19
GC2,Grubbs 2nd generation,,848.97
CCCCOP(OCCCC)OCCCC,Tributyl phosphite,0.925,250.31
Cc1ccccc1,Toluene,0.867,92.14
[C],Carbon black,,
";

fn db() -> CompoundDatabase {
    CompoundDatabase::from_reader(COMPOUND_TABLE.as_bytes()).unwrap()
}

fn monomer(db: &CompoundDatabase, smiles: &str, mass: f64) -> Sample {
    Sample::new(smiles, db, Role::Monomer, Some(mass), None).unwrap()
}

fn catalyst(db: &CompoundDatabase, mass: f64) -> Sample {
    Sample::new(GRUBBS, db, Role::Catalyst, Some(mass), None).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_chem_db() {
    let db = db();
    assert_eq!(db.len(), 6);
    assert!(db.exists(DICYCLOPENTADIENE));
    assert!(!db.exists("Phlogiston"));
    assert_eq!(db.density(DICYCLOPENTADIENE).unwrap(), 0.98);
    assert_eq!(db.molecular_weight(DICYCLOPENTADIENE).unwrap(), 132.2);
    assert_eq!(db.name(ENB).unwrap(), "5-Ethylidene-2-norbornene");
    assert!(db.density(GRUBBS).unwrap().is_nan());
    assert!(!db.is_empty());
    assert_eq!(db.iter().next().map(|r| r.smiles.as_str()), Some(DICYCLOPENTADIENE));
    assert!(CompoundDatabase::default().is_empty());
}

#[test]
fn test_duplicate_key_rejected() {
    let records = vec![
        CompoundRecord::new(TOLUENE, "Toluene", 0.867, 92.14),
        CompoundRecord::new(TOLUENE, "Methylbenzene", 0.867, 92.14),
    ];
    let err = CompoundDatabase::load(records).unwrap_err();
    assert!(matches!(err, ChemistryError::DuplicateKey(ref key) if key == TOLUENE));
}

#[test]
fn test_missing_key_column() {
    let err = CompoundDatabase::from_reader("Component,Density (g/mL)\nWater,1.0\n".as_bytes())
        .unwrap_err();
    assert!(matches!(err, ChemistryError::MissingColumn(_)));
}

#[test]
fn test_validate_all() {
    let db = db();
    assert!(db.validate_all([DICYCLOPENTADIENE, "", GRUBBS]).is_ok());

    let err = db.validate_all([ENB, "Phlogiston", CARBON_BLACK]).unwrap_err();
    assert!(matches!(err, ChemistryError::NotFound(ref s) if s == "Phlogiston"));

    let err = db.validate_all([ENB, CARBON_BLACK]).unwrap_err();
    assert!(matches!(err, ChemistryError::MissingMolecularWeight(ref s) if s == CARBON_BLACK));
    assert!(err.to_string().contains("does not have a molecular weight"));
}

#[test]
fn test_sample_from_mass() {
    let db = db();
    let sample = monomer(&db, DICYCLOPENTADIENE, 870.0);
    assert_eq!(sample.mass(), 870.0);
    assert_eq!(sample.observed_mass(), Some(870.0));
    assert_eq!(round2(sample.moles()), 6.58);
    assert_close(sample.derived_volume(), 870.0 / 0.98);
    assert_close(sample.resolved_volume(), 870.0 / 0.98);
}

#[test]
fn test_sample_from_volume() {
    let db = db();
    let sample = Sample::new(DICYCLOPENTADIENE, &db, Role::Monomer, None, Some(887.0)).unwrap();
    assert_close(sample.mass(), 869.26);
    assert_eq!(sample.observed_mass(), None);
    assert_eq!(sample.volume(), Some(887.0));
    assert_eq!(round2(sample.moles()), 6.58);
}

#[test]
fn test_volume_without_density_resolves_to_zero() {
    let db = db();
    let sample = Sample::new(GRUBBS, &db, Role::Inhibitor, None, Some(2.0)).unwrap();
    assert_eq!(sample.mass(), 0.0);
    assert_eq!(sample.moles(), 0.0);
    assert_eq!(mass_from_volume(5.0, f64::NAN), 0.0);
}

#[test]
fn test_sample_bad_values() {
    let db = db();
    assert!(matches!(
        Sample::new(DICYCLOPENTADIENE, &db, Role::Monomer, None, None),
        Err(ChemistryError::MissingQuantity)
    ));
    assert!(matches!(
        Sample::new(DICYCLOPENTADIENE, &db, Role::Monomer, Some(200.0), Some(100.0)),
        Err(ChemistryError::ConflictingQuantities)
    ));
    assert!(matches!(
        Sample::new("", &db, Role::Monomer, Some(1.0), None),
        Err(ChemistryError::MissingIdentifier)
    ));
    assert!(matches!(
        Sample::new("Phlogiston", &db, Role::Monomer, Some(1.0), None),
        Err(ChemistryError::NotFound(_))
    ));
}

#[test]
fn test_zero_quantity_counts_as_not_supplied() {
    let db = db();
    let sample = Sample::new(TOLUENE, &db, Role::Solvent, Some(0.0), Some(2.0)).unwrap();
    assert_eq!(sample.observed_mass(), None);
    assert_close(sample.mass(), 2.0 * 0.867);
}

#[test]
fn test_monomer_mol_percent() {
    let db = db();
    let monomers = vec![
        monomer(&db, DICYCLOPENTADIENE, 870.0),
        monomer(&db, ENB, 560.0),
    ];

    let first = monomer_mol_percent(&monomers[0], &monomers).unwrap();
    let second = monomer_mol_percent(&monomers[1], &monomers).unwrap();
    assert_eq!(first, 58.55);
    assert_eq!(second, 41.45);
    assert!((first + second - 100.0).abs() < 0.011);
}

#[test]
fn test_monomer_mol_percent_without_peers() {
    let db = db();
    let lone = monomer(&db, ENB, 10.0);
    let err = monomer_mol_percent(&lone, &[]).unwrap_err();
    assert!(matches!(err, ChemistryError::ZeroDenominator { .. }));
}

#[test]
fn test_monomer_volume_and_average_weight() {
    let db = db();
    let monomers = vec![
        monomer(&db, DICYCLOPENTADIENE, 98.0),
        monomer(&db, ENB, 89.3),
    ];
    assert_close(monomer_volume(&monomers), 200.0);

    let a = 98.0 / 132.2;
    let b = 89.3 / 120.19;
    let expected = (a * 132.2 + b * 120.19) / (a + b);
    assert_close(average_monomer_molecular_weight(&monomers).unwrap(), expected);
}

#[test]
fn test_catalyst_monomer_molar_ratio() {
    let db = db();
    let monomers = vec![
        monomer(&db, DICYCLOPENTADIENE, 870.0),
        monomer(&db, ENB, 560.0),
    ];
    let ratio = catalyst_monomer_molar_ratio(&catalyst(&db, 0.01), &monomers).unwrap();
    assert_eq!(ratio, 954261.59);

    let doubled = catalyst_monomer_molar_ratio(&catalyst(&db, 0.02), &monomers).unwrap();
    assert!(doubled < ratio);
}

#[test]
fn test_inhibitor_catalyst_molar_ratio() {
    let db = db();
    let inhibitor = Sample::new(TBP, &db, Role::Inhibitor, None, Some(0.005)).unwrap();
    let ratio = inhibitor_catalyst_molar_ratio(&inhibitor, &[catalyst(&db, 0.01)]).unwrap();
    assert_eq!(ratio, 1.57);

    let err = inhibitor_catalyst_molar_ratio(&inhibitor, &[]).unwrap_err();
    assert!(matches!(err, ChemistryError::ZeroDenominator { .. }));
}

#[test]
fn test_solvent_concentration_does_not_mutate() {
    let db = db();
    let solvent = Sample::new(TOLUENE, &db, Role::Solvent, Some(0.867), None).unwrap();
    let before = solvent.clone();

    assert_eq!(solvent_concentration(&solvent, &catalyst(&db, 0.01)).unwrap(), 100.0);
    assert_eq!(solvent, before);
    assert_eq!(solvent.volume(), None);

    let measured = Sample::new(TOLUENE, &db, Role::Solvent, None, Some(0.5)).unwrap();
    assert_eq!(solvent_concentration(&measured, &catalyst(&db, 0.25)).unwrap(), 2.0);
}

#[test]
fn test_additive_weight_percent() {
    let db = db();
    let monomers = vec![
        monomer(&db, DICYCLOPENTADIENE, 870.0),
        monomer(&db, ENB, 560.0),
    ];
    let additives = vec![Sample::new(TOLUENE, &db, Role::Additive, Some(10.0), None).unwrap()];
    let solvents = vec![Sample::new(TOLUENE, &db, Role::Solvent, None, Some(1.0)).unwrap()];
    let catalysts = vec![catalyst(&db, 0.01)];

    let percent =
        additive_weight_percent(&additives[0], &additives, &monomers, &catalysts, &solvents)
            .unwrap();
    assert_eq!(percent, 0.69);
}

#[test]
fn test_total_volume() {
    let db = db();
    let monomers = vec![monomer(&db, DICYCLOPENTADIENE, 98.0)];
    let additives = vec![
        Sample::new(TOLUENE, &db, Role::Additive, None, Some(3.0)).unwrap(),
        Sample::new(TOLUENE, &db, Role::Additive, Some(0.867), None).unwrap(),
    ];
    let inhibitor = Sample::new(TBP, &db, Role::Inhibitor, None, Some(0.5)).unwrap();
    let solvent = Sample::new(TOLUENE, &db, Role::Solvent, Some(1.734), None).unwrap();

    assert_close(additive_volume_total(&additives), 4.0);
    assert_close(
        total_volume(&additives, &monomers, &inhibitor, &solvent),
        4.0 + 100.0 + 0.5 + 2.0,
    );
}

#[test]
fn test_initiator_role_inference() {
    let db = db();
    let by_volume = Sample::initiator(TOLUENE, &db, None, None, Some(1.0)).unwrap();
    let by_mass = Sample::initiator(GRUBBS, &db, None, Some(0.01), None).unwrap();
    let explicit =
        Sample::initiator(TOLUENE, &db, Some(InitiatorRole::Catalyst), None, Some(1.0)).unwrap();

    assert_eq!(by_volume.initiator_role(), Some(InitiatorRole::Solvent));
    assert_eq!(by_mass.initiator_role(), Some(InitiatorRole::Catalyst));
    assert_eq!(explicit.initiator_role(), Some(InitiatorRole::Catalyst));
    assert_eq!(monomer(&db, ENB, 1.0).initiator_role(), None);
}

#[test]
fn test_initiator_summary() {
    let db = db();
    let initiators = vec![
        Sample::initiator(GRUBBS, &db, None, Some(0.003), None).unwrap(),
        Sample::initiator(TOLUENE, &db, None, None, Some(0.5)).unwrap(),
    ];
    let summary = InitiatorSummary::from_samples(&initiators);
    assert_close(summary.catalyst_mass, 0.003);
    assert_close(summary.solvent_volume, 0.5);

    let concentration = summary.concentration().unwrap();
    assert_close(concentration.mass_per_volume, 0.006);
    assert_close(
        concentration.moles_per_volume,
        (0.003 / 848.97) / (0.5 * 10e6),
    );

    let catalyst_only = InitiatorSummary::from_samples(&initiators[..1]);
    assert!(catalyst_only.concentration().is_none());
}

#[test]
fn test_round2_ties_to_even() {
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(0.625), 0.62);
    assert_eq!(round2(0.375), 0.38);
    assert_eq!(round2(-0.125), -0.12);
    assert_eq!(round2(58.5507), 58.55);
    assert_eq!(round2(1.126), 1.13);
}

#[test]
fn test_format_moles() {
    assert_eq!(format_moles(870.0 / 132.2), "6.58e+00");
    assert_eq!(format_moles(0.0012), "1.20e-03");
    assert_eq!(format_moles(12345.0), "1.23e+04");
    assert_eq!(format_moles(0.0), "0.00e+00");
    assert_eq!(format_moles(f64::NAN), "nan");
}

proptest! {
    #[test]
    fn prop_mass_only_sample(mass in 0.001f64..10_000.0) {
        let db = db();
        let sample = monomer(&db, DICYCLOPENTADIENE, mass);
        prop_assert_eq!(sample.derived_volume(), mass / 0.98);
        prop_assert_eq!(sample.moles(), mass / 132.2);
    }

    #[test]
    fn prop_volume_only_sample(volume in 0.001f64..10_000.0) {
        let db = db();
        let sample = Sample::new(ENB, &db, Role::Monomer, None, Some(volume)).unwrap();
        prop_assert_eq!(sample.mass(), volume * 0.893);

        let no_density = Sample::new(GRUBBS, &db, Role::Catalyst, None, Some(volume)).unwrap();
        prop_assert_eq!(no_density.mass(), 0.0);
    }

    #[test]
    fn prop_mol_percent_sums_to_hundred(masses in prop::collection::vec(0.1f64..1000.0, 1..8)) {
        let db = db();
        let monomers: Vec<Sample> = masses
            .iter()
            .enumerate()
            .map(|(i, &m)| monomer(&db, if i % 2 == 0 { DICYCLOPENTADIENE } else { ENB }, m))
            .collect();

        let total: f64 = monomers
            .iter()
            .map(|m| monomer_mol_percent(m, &monomers).unwrap())
            .sum();
        prop_assert!((total - 100.0).abs() <= 0.005 * monomers.len() as f64 + 1e-9);
    }

    #[test]
    fn prop_heavier_catalyst_lowers_ratio(mass in 0.001f64..1.0, extra in 0.5f64..10.0) {
        let db = db();
        let monomers = vec![monomer(&db, DICYCLOPENTADIENE, 870.0), monomer(&db, ENB, 560.0)];
        let light = catalyst_monomer_molar_ratio(&catalyst(&db, mass), &monomers).unwrap();
        let heavy = catalyst_monomer_molar_ratio(&catalyst(&db, mass * (1.0 + extra)), &monomers).unwrap();
        prop_assert!(heavy < light);
    }
}
