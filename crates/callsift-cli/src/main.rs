//! Callsift CLI - extract structured records from sales-call transcripts.

use callsift_cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match callsift_cli::run(&cli) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
