// src/bin/fypgraph.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fypgraph_core::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli::execute(&cli) {
        Ok(code) => code.exit(),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "fypgraph_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
