use std::env;
use std::process;

use donation_engine::{Config, run};
use log::info;

fn main() {
    // Expecting the party file, the company file and an optional top-n
    let args: Vec<String> = env::args().collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    info!(
        "starting donation engine with party file {} and company file {}",
        config.party_file.display(),
        config.company_file.display()
    );

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
