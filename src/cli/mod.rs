use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod compound;
mod config;
mod extract;
mod validate;

pub use config::Config;

/// polycure - Derived metadata for polymer-curing formulation batches
#[derive(Parser)]
#[command(name = "polycure")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the derived-metadata tree of a batch directory as JSON
    Extract {
        /// Batch directory holding batch.toml and one CSV per sheet
        #[arg(value_name = "BATCH_DIR")]
        batch_dir: PathBuf,

        /// Output JSON path (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Compound reference table (CSV)
        #[arg(long, value_name = "CSV")]
        compounds: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a batch directory and print the validation report
    Validate {
        /// Batch directory holding batch.toml and one CSV per sheet
        #[arg(value_name = "BATCH_DIR")]
        batch_dir: PathBuf,

        /// Compound reference table (CSV)
        #[arg(long, value_name = "CSV")]
        compounds: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display one compound of the reference table
    Compound {
        /// SMILES key of the compound, or its component name
        #[arg(value_name = "SMILES|NAME")]
        smiles: String,

        /// Compound reference table (CSV)
        #[arg(long, value_name = "CSV")]
        compounds: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract {
            batch_dir,
            output,
            compounds,
            config,
            compact,
        } => {
            let config = Config::load(config.as_deref())?;
            extract::run(batch_dir, output, config.compound_table(compounds)?, config.pretty(compact))
        }
        Commands::Validate {
            batch_dir,
            compounds,
            config,
        } => {
            let config = Config::load(config.as_deref())?;
            validate::run(batch_dir, config.compound_table(compounds)?)
        }
        Commands::Compound {
            smiles,
            compounds,
            config,
        } => {
            let config = Config::load(config.as_deref())?;
            compound::run(&smiles, config.compound_table(compounds)?)
        }
    }
}
