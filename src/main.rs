//! # polycure
//!
//! Command-line front end for formulation batch enrichment.
//!
//! ## Usage
//!
//! ```bash
//! # Extract the derived-metadata tree of a batch directory
//! polycure extract batch-042/ --compounds compounds.csv -o batch-042.json
//!
//! # Check a batch without writing anything
//! polycure validate batch-042/ --compounds compounds.csv
//!
//! # Look up one compound
//! polycure compound "C1C=CC2C1C3CC2C=C3" --compounds compounds.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
