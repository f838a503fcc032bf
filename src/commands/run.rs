//! `qvantum run FILE`: load a circuit file, run it, and report the final state.
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::SimConfig;
use crate::core::circuit_file::load_circuit_file;
use crate::core::render::basis_label;
use crate::core::QuantumState;

pub struct RunOptions {
    /// `Some(None)` is a bare `--shots`: sample the configured number of shots.
    pub shots: Option<Option<usize>>,
    pub seed: Option<u64>,
    pub measure: bool,
}

pub fn run_file(file: &Path, opts: &RunOptions, cfg: &SimConfig) -> Result<()> {
    let mut loaded = load_circuit_file(file)
        .with_context(|| format!("failed to load circuit {}", file.display()))?;
    let qubits = loaded.register.qubit_count();
    info!(file = %file.display(), qubits, layers = loaded.circuit.len(), "running circuit");

    loaded
        .circuit
        .run(&mut loaded.register)
        .context("circuit run failed; the register state is not meaningful")?;

    println!("{} {}", "state:".green().bold(), loaded.register.show());

    if cfg.show_probabilities {
        println!("{}", "probabilities:".cyan().bold());
        for (i, p) in loaded.register.probabilities().iter().enumerate() {
            println!("  |{}>  {:.4}", basis_label(i, qubits), p);
        }
    }

    let mut rng = match opts.seed.or(cfg.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(requested) = opts.shots {
        let shots = requested.unwrap_or(cfg.shots);
        let counts = loaded
            .register
            .sample(shots, &mut rng)
            .context("sampling failed")?;
        println!("{} {}", "shots:".cyan().bold(), shots);
        for (outcome, n) in counts {
            println!("  |{}>  {}", basis_label(outcome, qubits), n);
        }
    }

    if opts.measure {
        let outcome = loaded.register.measure(&mut rng).context("measurement failed")?;
        println!("{} |{}>", "measured:".magenta().bold(), basis_label(outcome, qubits));
    }

    Ok(())
}
