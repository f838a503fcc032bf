use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "qvantum",
    about = "qvantum: run small quantum circuits on a state-vector simulator",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QvantumCli {
    /// Global: path to config (TOML); default: ~/.qvantum/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: more log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a circuit file and print the final state
    ///
    /// Examples:
    ///   qvantum run bell.toml
    ///   qvantum run bell.toml --shots 1000 --seed 7
    Run {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Sample N outcomes from the final state (no collapse); bare --shots uses the configured count
        #[arg(long = "shots", value_name = "N", num_args = 0..=1)]
        shots: Option<Option<usize>>,
        /// RNG seed for --shots / --measure (overrides config)
        #[arg(long = "seed", value_name = "S")]
        seed: Option<u64>,
        /// Collapse the final state once and print the outcome
        #[arg(long = "measure", action = ArgAction::SetTrue)]
        measure: bool,
    },

    /// List the gate catalog
    Gates,
}
