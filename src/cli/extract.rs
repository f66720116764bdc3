use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use polycure::batch::{BatchAssembler, ExtractionEnvelope};
use polycure::chemistry::CompoundDatabase;
use polycure::report::LogSink;
use polycure::workbook::load_batch_dir;

/// Extract a batch directory to JSON
pub fn run(batch_dir: PathBuf, output: Option<PathBuf>, compounds: PathBuf, pretty: bool) -> Result<()> {
    if !batch_dir.is_dir() {
        anyhow::bail!("Batch directory does not exist: {}", batch_dir.display());
    }

    info!("polycure extract");
    info!("================");
    info!("Batch:     {}", batch_dir.display());
    info!("Compounds: {}", compounds.display());

    let db = CompoundDatabase::from_csv_file(&compounds)
        .with_context(|| format!("Failed to load compound table {}", compounds.display()))?;
    info!("Loaded {} compounds", db.len());

    let workbook = load_batch_dir(&batch_dir)
        .with_context(|| format!("Failed to read batch {}", batch_dir.display()))?;

    let mut assembler = BatchAssembler::new(&db, LogSink);
    let experiment = assembler
        .assemble(&workbook)
        .with_context(|| format!("Extraction of {} failed", batch_dir.display()))?;

    let envelope = ExtractionEnvelope::new(experiment);

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, &envelope)
    } else {
        serde_json::to_writer(&mut writer, &envelope)
    };
    written.context("Failed to serialize extraction")?;
    writeln!(writer)?;
    writer.flush()?;

    if let Some(path) = output {
        info!("Wrote {}", path.display());
    }
    Ok(())
}
