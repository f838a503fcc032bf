/// qvantum main — run circuit files, list the gate catalog.
use clap::Parser; // trait import enables QvantumCli::parse()
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use qvantum::cli::{Command, QvantumCli};
use qvantum::commands::{gates, run};
use qvantum::config::{load_config, resolve_config_path};

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "qvantum=warn",
        1 => "qvantum=debug",
        _ => "qvantum=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = QvantumCli::parse();
    init_tracing(args.verbose);

    if let Err(e) = dispatch(args) {
        eprintln!("{} {:#}", "err:".red().bold(), e);
        std::process::exit(1);
    }
}

fn dispatch(args: QvantumCli) -> anyhow::Result<()> {
    let cfg_path = resolve_config_path(&args.config);
    let cfg = load_config(cfg_path.as_deref(), args.config.is_some())?;

    match args.cmd {
        Command::Run { file, shots, seed, measure } => {
            run::run_file(&file, &run::RunOptions { shots, seed, measure }, &cfg)
        }
        Command::Gates => gates::list_gates(),
    }
}
