//! Command-line argument definitions for the ds62 code generator
//!
//! With no arguments the tool reads `tc-ds62.txt` from the working
//! directory and writes `HP_2011_ds62.py` next to it.

use crate::config::Config;
use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the ds62 code generator
///
/// Converts the Holland & Powell tc-ds62 dataset into a BurnMan module of
/// endmember definitions in SI units.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hp-ds62-codegen",
    version,
    about = "Generate BurnMan endmember definitions from the Holland & Powell tc-ds62 dataset",
    long_about = "Reads the THERMOCALC tc-ds62.txt dataset and writes a Python module with one \
                  Mineral class per solid endmember (SI units, order/disorder modifiers attached) \
                  followed by the variance-covariance matrix of endmember enthalpies."
)]
pub struct Args {
    /// Dataset file to convert
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Generated module path
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Path of the generated Python module"
    )]
    pub output_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Apply the arguments on top of the default configuration
    pub fn to_config(&self) -> Config {
        Config::default()
            .with_input_path(&self.input_path)
            .with_output_path(&self.output_path)
    }
}
