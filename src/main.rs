//! Главный исполняемый файл sqlsema

use clap::Parser;
use sqlsema::cli::{run, Cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let code = run(&cli)?;
    std::process::exit(code);
}
