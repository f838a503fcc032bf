//! `qvantum gates`: print the catalog.
use anyhow::Result;
use colored::Colorize;

use crate::core::gates::catalog;

pub fn list_gates() -> Result<()> {
    println!("{:<18} {:>6} {:>7}  {}", "gate".bold(), "dim".bold(), "qubits".bold(), "unitary".bold());
    for g in catalog() {
        let ok = if g.unitary_check() { "yes".green() } else { "NO".red().bold() };
        println!("{:<18} {:>6} {:>7}  {}", g.name(), g.dimension(), g.qubit_count(), ok);
    }
    Ok(())
}
