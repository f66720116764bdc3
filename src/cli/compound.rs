use anyhow::{Context, Result};
use std::path::PathBuf;

use polycure::chemistry::CompoundDatabase;

fn show(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "<none>".to_string())
}

/// Display one compound of the reference table, looked up by SMILES first
/// and by component name (case-insensitive) second
pub fn run(query: &str, compounds: PathBuf) -> Result<()> {
    let db = CompoundDatabase::from_csv_file(&compounds)
        .with_context(|| format!("Failed to load compound table {}", compounds.display()))?;
    if db.is_empty() {
        anyhow::bail!("Compound table {} has no entries", compounds.display());
    }

    let record = db
        .get(query)
        .or_else(|| db.iter().find(|r| r.name.eq_ignore_ascii_case(query.trim())));
    let Some(record) = record else {
        anyhow::bail!("{} not in Chemistry Database", query);
    };
    let smiles = record.smiles.as_str();

    println!("Compound");
    println!("========");
    println!("SMILES:            {}", record.smiles);
    println!("Name:              {}", record.name);
    println!("Density (g/mL):    {}", show(record.density));
    println!("Mwt. (g/mol):      {}", show(record.molecular_weight));

    if db.validate_all([smiles]).is_err() {
        println!();
        println!("Warning: no usable molecular weight; batches using it will be rejected");
    }
    Ok(())
}
