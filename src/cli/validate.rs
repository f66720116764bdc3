use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use polycure::batch::BatchAssembler;
use polycure::chemistry::CompoundDatabase;
use polycure::report::{ReportSink, ValidationCheck, ValidationReport};
use polycure::workbook::load_batch_dir;

/// Validate a batch directory and print the report
pub fn run(batch_dir: PathBuf, compounds: PathBuf) -> Result<()> {
    info!("polycure validate");
    info!("=================");
    info!("Batch: {}", batch_dir.display());
    info!("");

    let db = CompoundDatabase::from_csv_file(&compounds)
        .with_context(|| format!("Failed to load compound table {}", compounds.display()))?;

    let mut report = ValidationReport::new(batch_dir.display().to_string());

    match load_batch_dir(&batch_dir) {
        Ok(workbook) => {
            report.record(ValidationCheck::ok(format!(
                "Batch directory read ({} sheets)",
                workbook.sheets.len()
            )));
            let result = BatchAssembler::new(&db, &mut report).assemble(&workbook);
            if let Err(e) = result {
                if !report.has_failures() {
                    report.record(ValidationCheck::failed("Batch assembly", e.to_string()));
                }
            }
        }
        Err(e) => report.record(ValidationCheck::failed("Batch directory read", e.to_string())),
    }

    println!("{}", report.format_colored());

    // Exit with error code if validation failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
